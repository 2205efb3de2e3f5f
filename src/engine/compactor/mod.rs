pub mod background;

pub use background::{PlanExecutionWorker, PlanRunner, start_plan_execution_worker};
