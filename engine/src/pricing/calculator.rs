// Apartment, storage room and parking space price calculation
use shared::models::{
    ApartmentQuote, ApartmentRequest, AreaBreakdown, CoefficientBreakdown, CrmPricing, ParkingQuote,
    ParkingRequest, PricingBreakdown, SitePricing, StorageQuote, StorageRequest,
};

use super::coefficients::*;
use super::round_to;
use crate::error::EngineError;

/// Share of the summer rooms (balconies, loggias) area counted at full price.
const SUMMER_AREA_COEFFICIENT: f64 = 0.3;

pub fn validate_apartment_request(req: &ApartmentRequest) -> Result<(), EngineError> {
    if !(MIN_FLOOR..=MAX_FLOOR).contains(&req.floor) {
        return Err(EngineError::ValidationError(format!(
            "floor must be between {} and {}, got {}",
            MIN_FLOOR, MAX_FLOOR, req.floor
        )));
    }
    if !(req.area_total > 0.0) {
        return Err(EngineError::ValidationError(format!(
            "area_total must be greater than 0, got {}",
            req.area_total
        )));
    }
    if !(req.area_summer >= 0.0) {
        return Err(EngineError::ValidationError(format!(
            "area_summer must be greater than or equal to 0, got {}",
            req.area_summer
        )));
    }
    if req.units_on_floor < 1 {
        return Err(EngineError::ValidationError(format!(
            "units_on_floor must be greater than or equal to 1, got {}",
            req.units_on_floor
        )));
    }
    if !req.price_adjustment.is_finite() {
        return Err(EngineError::ValidationError("price_adjustment must be a finite number".to_string()));
    }
    Ok(())
}

pub fn validate_storage_request(req: &StorageRequest) -> Result<(), EngineError> {
    if !(req.area > 0.0) || !req.area.is_finite() {
        return Err(EngineError::ValidationError(format!(
            "area must be greater than 0, got {}",
            req.area
        )));
    }
    Ok(())
}

/// Full price breakdown of an apartment. Unknown coefficient keys count as zero.
pub fn calculate_apartment_price(req: &ApartmentRequest) -> Result<ApartmentQuote, EngineError> {
    let base_price = lookup(BASE_PRICES, &req.apartment_type)
        .ok_or_else(|| EngineError::UnknownOption(format!("Unknown apartment type: {}", req.apartment_type)))?;

    let area_summer_coeff = round_to(req.area_summer * SUMMER_AREA_COEFFICIENT, 2);
    let area_without_summer = round_to(req.area_total - req.area_summer, 2);
    let area_with_coeff = round_to(area_without_summer + area_summer_coeff, 2);

    let floor = lookup_int(FLOOR_COEFFICIENTS, req.floor).unwrap_or(0.0);
    let size = lookup(SIZE_COEFFICIENTS, &req.size).unwrap_or(0.0);
    let layout = lookup(LAYOUT_COEFFICIENTS, &req.layout).unwrap_or(0.0);
    let geometry = lookup(GEOMETRY_COEFFICIENTS, &req.geometry).unwrap_or(0.0);
    let elevator = lookup(ELEVATOR_COEFFICIENTS, &req.elevator_zone).unwrap_or(0.0);
    let view = lookup(VIEW_COEFFICIENTS, &req.view).unwrap_or(0.0);
    let position = lookup(POSITION_COEFFICIENTS, &req.position).unwrap_or(0.0);
    let units_on_floor = lookup_int(UNITS_ON_FLOOR_COEFFICIENTS, req.units_on_floor).unwrap_or(0.0);
    let building = lookup(BUILDING_COEFFICIENTS, &req.building).unwrap_or(0.0);

    let total_coeff = floor + size + layout + geometry + elevator + view + position + units_on_floor + building;

    let price_per_sqm = round_to(base_price + base_price * total_coeff, 2);
    let budget = round_to(price_per_sqm * req.area_total, 2);

    let final_price_per_sqm = round_to(price_per_sqm + price_per_sqm * req.price_adjustment, 2);
    let final_budget = round_to(final_price_per_sqm * req.area_total, 2);

    let crm_price_per_sqm = round_to(final_price_per_sqm * (1.0 + MAX_APARTMENT_DISCOUNT), 2);
    let crm_budget = round_to(crm_price_per_sqm * req.area_total, 2);

    let site_price_per_sqm = round_to(crm_price_per_sqm + BOOKING_FEE, 2);
    let site_budget = round_to(site_price_per_sqm * req.area_total, 2);

    Ok(ApartmentQuote {
        input: req.clone(),
        areas: AreaBreakdown {
            total: req.area_total,
            summer: req.area_summer,
            summer_with_coeff: area_summer_coeff,
            without_summer: area_without_summer,
            with_coeff: area_with_coeff,
        },
        coefficients: CoefficientBreakdown {
            base_price,
            floor,
            size,
            layout,
            geometry,
            elevator,
            view,
            position,
            units_on_floor,
            building,
            total: round_to(total_coeff, 6),
        },
        pricing: PricingBreakdown {
            price_per_sqm,
            budget,
            adjustment: req.price_adjustment,
            final_price_per_sqm,
            final_budget,
        },
        crm: CrmPricing {
            max_discount: MAX_APARTMENT_DISCOUNT,
            price_per_sqm: crm_price_per_sqm,
            budget: crm_budget,
        },
        site: SitePricing {
            booking_fee: BOOKING_FEE,
            price_per_sqm: site_price_per_sqm,
            budget: site_budget,
        },
    })
}

pub fn calculate_storage_price(req: &StorageRequest) -> StorageQuote {
    let price_per_sqm = if req.with_discount {
        round_to(STORAGE_PRICE_PER_SQM * (1.0 - STORAGE_DISCOUNT), 0)
    } else {
        STORAGE_PRICE_PER_SQM
    };

    StorageQuote {
        area: req.area,
        price_per_sqm,
        discount: if req.with_discount { STORAGE_DISCOUNT } else { 0.0 },
        total: round_to(price_per_sqm * req.area, 2),
    }
}

pub fn calculate_parking_price(req: &ParkingRequest) -> Result<ParkingQuote, EngineError> {
    let base_price = lookup(PARKING_PRICES, &req.parking_type)
        .ok_or_else(|| EngineError::UnknownOption(format!("Unknown parking type: {}", req.parking_type)))?;

    let price = if req.with_discount {
        round_to(base_price * (1.0 - PARKING_DISCOUNT), 0)
    } else {
        base_price
    };

    Ok(ParkingQuote {
        parking_type: req.parking_type.clone(),
        base_price,
        discount: if req.with_discount { PARKING_DISCOUNT } else { 0.0 },
        price,
    })
}
