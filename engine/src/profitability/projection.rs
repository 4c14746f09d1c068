// Investment profitability of a lot: resale price growth plus hotel rental income
use chrono::{Datelike, NaiveDate};
use shared::models::{
    HotelIncome, HotelYear, PaymentInfo, PriceProjection, ProfitabilityReport, ProfitabilitySummary,
};

use super::lots::LotRegistry;
use crate::error::EngineError;
use crate::pricing::coefficients::{lookup, Table};
use crate::pricing::round_to;

pub const BASE_YEAR: i32 = 2025;
const KEY_DELIVERY: (i32, u32, u32) = (2029, 11, 1);

/// Yearly price growth: 15 % for four years up to key delivery, 2 % afterwards.
pub const PRICE_GROWTH_RATES: [f64; 15] = [
    0.15, 0.15, 0.15, 0.15, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02,
];

/// Hotel occupancy for each year after key delivery.
pub const OCCUPANCY_RATES: [f64; 10] = [0.35, 0.44, 0.59, 0.65, 0.65, 0.65, 0.65, 0.65, 0.65, 0.65];
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Share of accommodation revenue kept by the management company.
pub const MANAGEMENT_EXPENSE_RATIO: f64 = 0.50;
/// Yearly growth of the average daily rate.
pub const ADR_INDEXATION: f64 = 0.08;

// Nightly accommodation rate by apartment size and CRM view.
const ADR_ACCOMMODATION: &[(&str, Table)] = &[
    ("XS", &[("ул.Морская", 14_400.0), ("Двор", 14_832.0), ("Море", 15_276.96), ("Озеро", 15_735.27)]),
    ("S", &[("ул.Морская", 14_688.0), ("Двор", 15_128.64), ("Море", 15_582.50), ("Озеро", 16_049.97)]),
    ("M", &[("ул.Морская", 16_891.20), ("Двор", 17_397.94), ("Море", 17_919.87), ("Озеро", 18_457.47)]),
    ("L", &[("ул.Морская", 18_242.50), ("Двор", 18_789.77), ("Море", 19_353.46), ("Озеро", 19_934.07)]),
    ("XL", &[("ул.Морская", 20_066.75), ("Двор", 20_668.75), ("Море", 21_288.81), ("Озеро", 21_927.47)]),
];
const FALLBACK_SIZE: &str = "S";
const FALLBACK_VIEW: &str = "Двор";
const FALLBACK_ACCOMMODATION_RATE: f64 = 14_400.0;

const ADR_BREAKFAST_BASE: f64 = 3_500.0;
const ADR_CHILDREN_BASE: f64 = 50.0;
const ADR_COWORKING_BASE: f64 = 50.0;

pub fn key_delivery_date() -> Result<NaiveDate, EngineError> {
    let (year, month, day) = KEY_DELIVERY;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| EngineError::ConfigError(format!("Invalid key delivery date {}-{}-{}", year, month, day)))
}

/// Base nightly rate. Unknown sizes use the `S` row, unknown views the `Двор` column.
pub fn accommodation_rate(size: &str, view_crm: &str) -> f64 {
    let row = ADR_ACCOMMODATION
        .iter()
        .find(|(s, _)| *s == size)
        .or_else(|| ADR_ACCOMMODATION.iter().find(|(s, _)| *s == FALLBACK_SIZE))
        .map(|(_, rates)| *rates);

    row.and_then(|rates| lookup(rates, view_crm).or_else(|| lookup(rates, FALLBACK_VIEW)))
        .unwrap_or(FALLBACK_ACCOMMODATION_RATE)
}

pub fn calculate_profitability(
    registry: &LotRegistry,
    building: &str,
    number: i64,
    installment: bool,
) -> Result<ProfitabilityReport, EngineError> {
    let lot = registry.find(building, number).ok_or_else(|| EngineError::LotNotFound {
        building: building.to_string(),
        number,
    })?;

    let purchase_price = (if installment { lot.installment_price } else { lot.full_payment_price })
        .filter(|price| *price != 0.0)
        .ok_or(EngineError::MissingLotPrice)?;

    // Price projection over the whole horizon.
    let years: Vec<i32> = (BASE_YEAR..=BASE_YEAR + PRICE_GROWTH_RATES.len() as i32).collect();
    let mut prices = Vec::with_capacity(PRICE_GROWTH_RATES.len() + 1);
    prices.push(purchase_price);
    for rate in PRICE_GROWTH_RATES {
        let last = prices[prices.len() - 1];
        prices.push(last * (1.0 + rate));
    }

    let key_delivery = key_delivery_date()?;
    let delivery_idx = (key_delivery.year() - BASE_YEAR) as usize;
    let price_at_delivery = prices[delivery_idx];
    let growth_to_delivery = (price_at_delivery - purchase_price) / purchase_price;
    let profit_at_delivery = price_at_delivery - purchase_price;

    let price_at_end = prices[prices.len() - 1];
    let profit_at_end = price_at_end - purchase_price;

    // Hotel income, starting the year after key delivery.
    let accommodation_base = accommodation_rate(&lot.size, &lot.view_crm);

    let mut hotel_years = Vec::with_capacity(OCCUPANCY_RATES.len());
    let mut cumulative_income = 0.0;
    let mut payback_hotel_years = None;
    let mut payback_total_years = None;

    for (i, occupancy) in OCCUPANCY_RATES.iter().copied().enumerate() {
        let year = key_delivery.year() + 1 + i as i32;
        let factor = (1.0 + ADR_INDEXATION).powi(i as i32);

        let accommodation = accommodation_base * factor;
        let adr_total = accommodation
            + ADR_BREAKFAST_BASE * factor
            + ADR_CHILDREN_BASE * factor
            + ADR_COWORKING_BASE * factor;

        let gross_revenue = adr_total * occupancy * DAYS_PER_YEAR;
        let gross_accommodation = accommodation * occupancy * DAYS_PER_YEAR;
        let owner_income = gross_accommodation - gross_accommodation * MANAGEMENT_EXPENSE_RATIO;
        let annual_yield = owner_income / purchase_price;

        cumulative_income += owner_income;

        let price_growth_profit = prices
            .get((year - BASE_YEAR) as usize)
            .map_or(profit_at_end, |price| price - purchase_price);

        let elapsed = i as u32 + 1;
        if payback_hotel_years.is_none() && cumulative_income >= purchase_price {
            payback_hotel_years = Some(elapsed);
        }
        if payback_total_years.is_none() && cumulative_income + price_growth_profit >= purchase_price {
            payback_total_years = Some(elapsed);
        }

        hotel_years.push(HotelYear {
            year,
            occupancy,
            adr: round_to(adr_total, 2),
            accommodation_rate: round_to(accommodation, 2),
            gross_revenue: round_to(gross_revenue, 2),
            owner_income: round_to(owner_income, 2),
            monthly_income: round_to(owner_income / 12.0, 2),
            annual_yield: round_to(annual_yield, 4),
            cumulative_income: round_to(cumulative_income, 2),
        });
    }

    let hotel_horizon = OCCUPANCY_RATES.len() as f64;
    let total_hotel_income = cumulative_income;
    let avg_annual_hotel_income = total_hotel_income / hotel_horizon;
    let total_return = total_hotel_income + profit_at_end;
    let avg_annual_total = total_return / hotel_horizon;

    let mut growth_rates = Vec::with_capacity(PRICE_GROWTH_RATES.len() + 1);
    growth_rates.push(0.0);
    growth_rates.extend_from_slice(&PRICE_GROWTH_RATES);

    Ok(ProfitabilityReport {
        lot: lot.info(),
        payment: PaymentInfo {
            installment,
            purchase_price: round_to(purchase_price, 2),
            site_price_sqm: lot.site_price_sqm,
            full_payment_price: lot.full_payment_price.map(|p| round_to(p, 2)),
            installment_price: lot.installment_price.map(|p| round_to(p, 2)),
        },
        price_projection: PriceProjection {
            years,
            prices: prices.iter().map(|p| round_to(*p, 2)).collect(),
            growth_rates,
            key_delivery_date: key_delivery,
            price_at_delivery: round_to(price_at_delivery, 2),
            growth_to_delivery: round_to(growth_to_delivery, 4),
            profit_at_delivery: round_to(profit_at_delivery, 2),
            price_sqm_at_delivery: round_to(price_at_delivery / lot.area, 2),
            price_at_2039: round_to(price_at_end, 2),
            profit_at_2039: round_to(profit_at_end, 2),
        },
        hotel_income: HotelIncome {
            years: hotel_years,
            total_income_10y: round_to(total_hotel_income, 2),
            avg_annual_income: round_to(avg_annual_hotel_income, 2),
            avg_annual_yield: round_to(avg_annual_hotel_income / purchase_price, 4),
        },
        summary: ProfitabilitySummary {
            total_return_10y: round_to(total_return, 2),
            avg_annual_total: round_to(avg_annual_total, 2),
            avg_annual_total_yield: round_to(avg_annual_total / purchase_price, 4),
            payback_hotel_years,
            payback_total_years,
        },
    })
}
