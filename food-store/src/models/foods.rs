/// Normalized fields of a food item, ready to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateFoodPayload<'data> {
    pub name: &'data str,
    pub unit: &'data str,
    pub company_id: &'data str,
}

impl<'data> CreateFoodPayload<'data> {
    pub fn new(name: &'data str, unit: &'data str, company_id: &'data str) -> Self {
        Self {
            name,
            unit,
            company_id,
        }
    }
}
