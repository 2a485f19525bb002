use cashflow_domain::{MonthPlan, Period};

use crate::CoreError;

/// Key-value persistence for plans, one record per period.
///
/// Loading a period that was never saved yields [`MonthPlan::default`].
pub trait PlanStorage: Send + Sync {
    fn load_plan(&self, period: Period) -> Result<MonthPlan, CoreError>;
    fn save_plan(&self, period: Period, plan: &MonthPlan) -> Result<(), CoreError>;
    fn delete_plan(&self, period: Period) -> Result<(), CoreError>;
    fn list_periods(&self) -> Result<Vec<Period>, CoreError>;
}
