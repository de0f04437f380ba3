mod opportunity;

pub use opportunity::{
    Opportunity, OpportunityCategory, OpportunityType, OpportunityWithNgo, Urgency,
};
