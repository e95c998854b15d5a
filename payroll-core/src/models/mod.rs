mod age_bracket;
mod salary_breakdown;
mod salary_input;
mod tax_context;
mod tax_input;
mod tax_result;
mod tax_slab;

pub use age_bracket::AgeBracket;
pub use salary_breakdown::SalaryBreakdown;
pub use salary_input::{DEFAULT_DAYS_IN_CYCLE, SalaryInput};
pub use tax_context::{FinancialYear, ResidencyStatus, TaxContext, TaxpayerType};
pub use tax_input::TaxInput;
pub use tax_result::{TaxComparison, TaxRegime, TaxResult};
pub use tax_slab::TaxSlab;
