// Registry of sellable lots, loaded from the lots JSON export
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::models::{LotInfo, LotOptions, LotSummary};

use crate::error::EngineError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lot {
    pub building: String,
    pub number: i64,
    pub code: String,
    pub floor: i64,
    pub area: f64,
    pub rooms: String,
    pub size: String,
    pub status: String,
    pub view: String,
    /// View category used by the CRM and the hotel rate table.
    pub view_crm: String,
    #[serde(default)]
    pub site_price_sqm: Option<f64>,
    #[serde(default)]
    pub full_payment_price: Option<f64>,
    #[serde(default)]
    pub installment_price: Option<f64>,
}

impl Lot {
    pub fn summary(&self) -> LotSummary {
        LotSummary {
            number: self.number,
            code: self.code.clone(),
            floor: self.floor,
            area: self.area,
            rooms: self.rooms.clone(),
            size: self.size.clone(),
            status: self.status.clone(),
        }
    }

    pub fn info(&self) -> LotInfo {
        LotInfo {
            code: self.code.clone(),
            building: self.building.clone(),
            number: self.number,
            floor: self.floor,
            area: self.area,
            rooms: self.rooms.clone(),
            size: self.size.clone(),
            view: self.view.clone(),
            view_crm: self.view_crm.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LotRegistry {
    lots: Vec<Lot>,
}

impl LotRegistry {
    pub fn new(lots: Vec<Lot>) -> Self {
        LotRegistry { lots }
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)?;
        let lots: Vec<Lot> = serde_json::from_str(&content)?;
        if let Some(lot) = lots.iter().find(|lot| !(lot.area > 0.0) || !lot.area.is_finite()) {
            return Err(EngineError::ValidationError(format!(
                "Lot {} has non-positive area {}",
                lot.code, lot.area
            )));
        }
        tracing::info!(path = %path.display(), count = lots.len(), "Loaded lot registry");
        Ok(LotRegistry::new(lots))
    }

    /// Like [`LotRegistry::load`], but falls back to an empty registry when the file cannot be read.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Lot registry unavailable, profitability lookups will fail");
                LotRegistry::default()
            }
        }
    }

    pub fn find(&self, building: &str, number: i64) -> Option<&Lot> {
        self.lots.iter().find(|lot| lot.building == building && lot.number == number)
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Buildings in sorted order and their lots sorted by number.
    pub fn options(&self) -> LotOptions {
        let mut lots: BTreeMap<String, Vec<LotSummary>> = BTreeMap::new();
        for lot in &self.lots {
            lots.entry(lot.building.clone()).or_default().push(lot.summary());
        }
        for summaries in lots.values_mut() {
            summaries.sort_by_key(|s| s.number);
        }
        LotOptions {
            buildings: lots.keys().cloned().collect(),
            lots,
        }
    }
}
