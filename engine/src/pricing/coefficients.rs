// Pricing coefficient tables for the first construction phase.
// Tables are ordered: the order is the order of the UI dropdowns.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub type Table = &'static [(&'static str, f64)];
pub type IntTable = &'static [(i64, f64)];

/// Base price per m² by apartment type.
pub const BASE_PRICES: Table = &[
    ("Ст", 327_000.0),
    ("1К", 313_920.0), // 327000 - 4 %
    ("2К", 307_380.0), // 327000 - 6 %
];

pub const FLOOR_COEFFICIENTS: IntTable = &[
    (12, 0.215),
    (11, 0.16),
    (10, 0.12),
    (9, 0.085),
    (8, 0.055),
    (7, 0.03),
    (6, 0.015),
    (5, 0.005),
    (4, 0.0),
    (3, -0.005),
    (2, -0.015),
    (1, -0.045),
];

pub const MIN_FLOOR: i64 = 1;
pub const MAX_FLOOR: i64 = 12;

pub const SIZE_COEFFICIENTS: Table = &[
    ("XS", 0.06),
    ("S", 0.04),
    ("M", 0.0),
    ("L", -0.01),
    ("XL", -0.02),
];

/// Area ranges (m²) behind each size label, per apartment type.
pub const SIZE_RANGES: &[(&str, &[(&str, &str)])] = &[
    ("Ст", &[("S", "<30"), ("M", "30-34"), ("L", "35-40"), ("XL", ">40")]),
    ("1К", &[("XS", "<40"), ("S", "40-45"), ("M", "45-50"), ("L", "50-55"), ("XL", ">55")]),
    ("2К", &[("XL", ">70")]),
];

pub const LAYOUT_COEFFICIENTS: Table = &[("Угловая", 0.03), ("Линейная", 0.0)];

pub const GEOMETRY_COEFFICIENTS: Table = &[("Правильная", 0.03), ("Неправильная", 0.0)];

/// Distance from the elevator.
pub const ELEVATOR_COEFFICIENTS: Table = &[("Зона 1", 0.005), ("Зона 2", 0.0), ("Зона 3", -0.005)];

pub const VIEW_COEFFICIENTS: Table = &[
    ("Море", 0.07),
    ("Двор+море", 0.05),
    ("Озеро", 0.03),
    ("Двор юго-запад", 0.02),
    ("Двор+озеро", 0.015),
    ("Двор юго-восток", 0.01),
    ("Двор юг", 0.0),
    ("Двор северо-восток", -0.01),
    ("Двор север", -0.015),
    ("Въездная зона северо-восток", -0.02),
    ("Коммерция", -0.02),
    ("Въездная зона север", -0.02),
    ("Улица северо-восток", -0.02),
    ("Улица север", -0.02),
];

/// Position of the apartment on its floor.
pub const POSITION_COEFFICIENTS: Table = &[
    ("Стандарт", 0.0),
    ("Около/над входной группой", -0.01),
    ("Над входом в коммерцию", -0.02),
    ("У входа в лифтовый холл", -0.01),
    ("Окна на кровлю", -0.005),
    ("Внутренний угол", -0.01),
];

pub const UNITS_ON_FLOOR_COEFFICIENTS: IntTable = &[
    (11, 0.015),
    (12, 0.014),
    (13, 0.013),
    (14, 0.012),
    (26, 0.0),
    (33, -0.007),
    (34, -0.008),
    (37, -0.011),
    (38, -0.012),
    (39, -0.013),
    (40, -0.014),
    (41, -0.015),
    (42, -0.016),
];

pub const BUILDING_COEFFICIENTS: Table = &[("С1", 0.0), ("С2", 0.12), ("С3-1", 0.0), ("С3-2", 0.0)];

pub const STORAGE_PRICE_PER_SQM: f64 = 250_000.0;
pub const STORAGE_DISCOUNT: f64 = 0.05;

pub const PARKING_PRICES: Table = &[
    ("Стандартное место", 1_500_000.0),
    ("VIP место", 1_800_000.0),
    ("Место для МГН М4", 1_700_000.0),
    ("Место для электромобилей", 2_000_000.0),
    ("Расширенное место", 2_000_000.0),
];
pub const PARKING_DISCOUNT: f64 = 0.05;

/// Markup applied to the final price to leave room for the maximum sales discount.
pub const MAX_APARTMENT_DISCOUNT: f64 = 0.10;
/// Added per m² on top of the CRM price for the website price.
pub const BOOKING_FEE: f64 = 6_000.0;

pub fn lookup(table: Table, key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn lookup_int(table: IntTable, key: i64) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn keys(table: Table) -> Vec<&'static str> {
    table.iter().map(|(k, _)| *k).collect()
}

/// All dropdown choices of the calculator UI.
#[derive(Debug, serde::Serialize)]
pub struct CalculatorOptions {
    pub apartment_types: Vec<&'static str>,
    pub floors: Vec<i64>,
    pub sizes: Vec<&'static str>,
    pub size_ranges: SizeRanges,
    pub layouts: Vec<&'static str>,
    pub geometries: Vec<&'static str>,
    pub elevator_zones: Vec<&'static str>,
    pub views: Vec<&'static str>,
    pub positions: Vec<&'static str>,
    pub units_on_floor: Vec<i64>,
    pub buildings: Vec<&'static str>,
    pub parking_types: Vec<&'static str>,
}

/// Serializes [`SIZE_RANGES`] as nested JSON objects, keeping table order.
#[derive(Debug)]
pub struct SizeRanges(&'static [(&'static str, &'static [(&'static str, &'static str)])]);

struct OrderedPairs(&'static [(&'static str, &'static str)]);

impl Serialize for OrderedPairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for SizeRanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (apartment_type, ranges) in self.0 {
            map.serialize_entry(apartment_type, &OrderedPairs(ranges))?;
        }
        map.end()
    }
}

pub fn options() -> CalculatorOptions {
    CalculatorOptions {
        apartment_types: keys(BASE_PRICES),
        floors: (MIN_FLOOR..=MAX_FLOOR).collect(),
        sizes: keys(SIZE_COEFFICIENTS),
        size_ranges: SizeRanges(SIZE_RANGES),
        layouts: keys(LAYOUT_COEFFICIENTS),
        geometries: keys(GEOMETRY_COEFFICIENTS),
        elevator_zones: keys(ELEVATOR_COEFFICIENTS),
        views: keys(VIEW_COEFFICIENTS),
        positions: keys(POSITION_COEFFICIENTS),
        units_on_floor: UNITS_ON_FLOOR_COEFFICIENTS.iter().map(|(k, _)| *k).collect(),
        buildings: keys(BUILDING_COEFFICIENTS),
        parking_types: keys(PARKING_PRICES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown_keys() {
        assert_eq!(lookup(BASE_PRICES, "2К"), Some(307_380.0));
        assert_eq!(lookup(VIEW_COEFFICIENTS, "Озеро"), Some(0.03));
        assert_eq!(lookup(VIEW_COEFFICIENTS, "Горы"), None);
        assert_eq!(lookup_int(FLOOR_COEFFICIENTS, 12), Some(0.215));
        assert_eq!(lookup_int(UNITS_ON_FLOOR_COEFFICIENTS, 20), None);
    }

    #[test]
    fn test_every_floor_has_a_coefficient() {
        for floor in MIN_FLOOR..=MAX_FLOOR {
            assert!(lookup_int(FLOOR_COEFFICIENTS, floor).is_some(), "floor {}", floor);
        }
    }

    #[test]
    fn test_discounted_base_prices() {
        let studio = lookup(BASE_PRICES, "Ст").unwrap();
        assert!((lookup(BASE_PRICES, "1К").unwrap() - studio * 0.96).abs() < 1e-6);
        assert!((lookup(BASE_PRICES, "2К").unwrap() - studio * 0.94).abs() < 1e-6);
    }

    #[test]
    fn test_options_lists() {
        let opts = options();
        assert_eq!(opts.apartment_types, vec!["Ст", "1К", "2К"]);
        assert_eq!(opts.floors, (1..=12).collect::<Vec<_>>());
        assert_eq!(opts.sizes, vec!["XS", "S", "M", "L", "XL"]);
        assert_eq!(opts.views.len(), 14);
        assert_eq!(opts.units_on_floor.first(), Some(&11));
        assert_eq!(opts.parking_types.len(), 5);
    }

    #[test]
    fn test_size_ranges_keep_table_order() {
        let json = serde_json::to_string(&options().size_ranges).unwrap();
        assert!(json.starts_with("{\"Ст\":{\"S\":\"<30\""), "{}", json);
        let first_type = json.find("\"1К\"").unwrap();
        let second_type = json.find("\"2К\"").unwrap();
        assert!(first_type < second_type);
        assert!(json.contains("\"2К\":{\"XL\":\">70\"}"));
    }
}
