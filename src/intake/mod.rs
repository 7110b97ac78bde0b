pub mod load;
pub mod types;

pub use load::{load_engagement, load_intake};
pub use types::{
    BudgetRange, CompanySize, EmailAction, EmailInteraction, EngagementHistory, IntakeRecord,
    PageView, Timeline,
};
