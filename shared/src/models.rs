// JSON data models exchanged between the pricing engine and the calculator UI.
// Field names are part of the wire contract.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApartmentRequest {
    pub apartment_type: String,
    pub floor: i64,
    pub area_total: f64,
    pub area_summer: f64,
    pub size: String,
    pub layout: String,
    pub geometry: String,
    pub elevator_zone: String,
    pub view: String,
    pub position: String,
    pub units_on_floor: i64,
    pub building: String,
    /// Price increase (positive) or discount (negative) as a fraction.
    #[serde(default)]
    pub price_adjustment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApartmentQuote {
    pub input: ApartmentRequest,
    pub areas: AreaBreakdown,
    pub coefficients: CoefficientBreakdown,
    pub pricing: PricingBreakdown,
    pub crm: CrmPricing,
    pub site: SitePricing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaBreakdown {
    pub total: f64,
    pub summer: f64,
    pub summer_with_coeff: f64,
    pub without_summer: f64,
    pub with_coeff: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoefficientBreakdown {
    pub base_price: f64,
    pub floor: f64,
    pub size: f64,
    pub layout: f64,
    pub geometry: f64,
    pub elevator: f64,
    pub view: f64,
    pub position: f64,
    pub units_on_floor: f64,
    pub building: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingBreakdown {
    pub price_per_sqm: f64,
    pub budget: f64,
    pub adjustment: f64,
    pub final_price_per_sqm: f64,
    pub final_budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrmPricing {
    pub max_discount: f64,
    pub price_per_sqm: f64,
    pub budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SitePricing {
    pub booking_fee: f64,
    pub price_per_sqm: f64,
    pub budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageRequest {
    pub area: f64,
    #[serde(default)]
    pub with_discount: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageQuote {
    pub area: f64,
    pub price_per_sqm: f64,
    pub discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParkingRequest {
    pub parking_type: String,
    #[serde(default)]
    pub with_discount: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParkingQuote {
    pub parking_type: String,
    pub base_price: f64,
    pub discount: f64,
    pub price: f64,
}

// Profitability

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitabilityRequest {
    pub building: String,
    pub number: i64,
    #[serde(default)]
    pub installment: bool,
}

/// Short lot description used by the lot picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotSummary {
    pub number: i64,
    pub code: String,
    pub floor: i64,
    pub area: f64,
    pub rooms: String,
    pub size: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LotOptions {
    pub buildings: Vec<String>,
    pub lots: BTreeMap<String, Vec<LotSummary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotInfo {
    pub code: String,
    pub building: String,
    pub number: i64,
    pub floor: i64,
    pub area: f64,
    pub rooms: String,
    pub size: String,
    pub view: String,
    pub view_crm: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInfo {
    pub installment: bool,
    pub purchase_price: f64,
    pub site_price_sqm: Option<f64>,
    pub full_payment_price: Option<f64>,
    pub installment_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceProjection {
    pub years: Vec<i32>,
    pub prices: Vec<f64>,
    pub growth_rates: Vec<f64>,
    pub key_delivery_date: NaiveDate,
    pub price_at_delivery: f64,
    pub growth_to_delivery: f64,
    pub profit_at_delivery: f64,
    pub price_sqm_at_delivery: f64,
    /// Price at the end of the projection horizon.
    pub price_at_2039: f64,
    pub profit_at_2039: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelYear {
    pub year: i32,
    pub occupancy: f64,
    pub adr: f64,
    pub accommodation_rate: f64,
    pub gross_revenue: f64,
    pub owner_income: f64,
    pub monthly_income: f64,
    pub annual_yield: f64,
    pub cumulative_income: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelIncome {
    pub years: Vec<HotelYear>,
    pub total_income_10y: f64,
    pub avg_annual_income: f64,
    pub avg_annual_yield: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitabilitySummary {
    pub total_return_10y: f64,
    pub avg_annual_total: f64,
    pub avg_annual_total_yield: f64,
    pub payback_hotel_years: Option<u32>,
    pub payback_total_years: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitabilityReport {
    pub lot: LotInfo,
    pub payment: PaymentInfo,
    pub price_projection: PriceProjection,
    pub hotel_income: HotelIncome,
    pub summary: ProfitabilitySummary,
}
