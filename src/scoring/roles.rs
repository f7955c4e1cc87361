//! Role-name constants shared by the scoring tables and the report formatter.

pub const BROKER: &str = "Real estate sales broker";
pub const GENERAL_DIRECTOR: &str = "General director";
pub const HEAD_OF_SALES: &str = "Head of sales";
pub const COMMERCIAL_DIRECTOR: &str = "Commercial director";
pub const HEAD_OF_MARKETING: &str = "Head of marketing";
pub const EXECUTIVE_ASSISTANT: &str = "Executive assistant";
pub const DESIGNER: &str = "Designer";
pub const OPERATIONS_DIRECTOR: &str = "Operations director";
pub const OPERATIONS_MANAGER: &str = "Operations manager";
pub const FINANCIAL_DIRECTOR: &str = "Financial director";
pub const MARKETING_ANALYST: &str = "Marketing analyst";
