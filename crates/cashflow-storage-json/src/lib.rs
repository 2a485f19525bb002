use std::{
    fs,
    path::{Path, PathBuf},
};

use cashflow_core::{fs::write_atomic, storage::PlanStorage, CoreError};
use cashflow_domain::{MonthPlan, Period};
use tracing::debug;

const PLAN_EXTENSION: &str = "json";

/// Filesystem-backed JSON persistence, one file per period key.
#[derive(Debug, Clone)]
pub struct JsonPlanStorage {
    plans_dir: PathBuf,
}

impl JsonPlanStorage {
    pub fn new(plans_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&plans_dir)?;
        Ok(Self { plans_dir })
    }

    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }

    pub fn plan_path(&self, period: Period) -> PathBuf {
        self.plans_dir
            .join(format!("{}.{}", period.storage_key(), PLAN_EXTENSION))
    }
}

impl PlanStorage for JsonPlanStorage {
    fn load_plan(&self, period: Period) -> Result<MonthPlan, CoreError> {
        let path = self.plan_path(period);
        if !path.exists() {
            debug!(%period, "no stored plan; starting empty");
            return Ok(MonthPlan::default());
        }
        load_plan_from_path(&path)
    }

    fn save_plan(&self, period: Period, plan: &MonthPlan) -> Result<(), CoreError> {
        let path = self.plan_path(period);
        save_plan_to_path(plan, &path)?;
        debug!(%period, path = %path.display(), "saved plan");
        Ok(())
    }

    fn delete_plan(&self, period: Period) -> Result<(), CoreError> {
        let path = self.plan_path(period);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn list_periods(&self) -> Result<Vec<Period>, CoreError> {
        if !self.plans_dir.exists() {
            return Ok(Vec::new());
        }
        let mut periods = Vec::new();
        for entry in fs::read_dir(&self.plans_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
                continue;
            }
            if let Some(period) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(Period::from_storage_key)
            {
                periods.push(period);
            }
        }
        periods.sort();
        Ok(periods)
    }
}

/// Saves a plan to an arbitrary path on disk.
pub fn save_plan_to_path(plan: &MonthPlan, path: &Path) -> Result<(), CoreError> {
    write_atomic(path, &serde_json::to_string_pretty(plan)?)?;
    Ok(())
}

/// Loads a plan from the provided filesystem path.
pub fn load_plan_from_path(path: &Path) -> Result<MonthPlan, CoreError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
