use food_store::CreateFoodPayload;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A food item as clients send it, and as `POST /foods` echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FoodBody {
    #[validate(length(min = 1))]
    #[schema(example = "Rice")]
    pub name: String,
    #[validate(length(min = 1))]
    #[schema(example = "kg")]
    pub unit: String,
    #[validate(length(min = 1))]
    #[schema(example = "C1")]
    pub company_id: String,
}

impl FoodBody {
    pub fn trimmed(self) -> FoodBody {
        FoodBody {
            name: self.name.trim().to_owned(),
            unit: self.unit.trim().to_owned(),
            company_id: self.company_id.trim().to_owned(),
        }
    }

    pub fn as_payload(&self) -> CreateFoodPayload<'_> {
        CreateFoodPayload::new(&self.name, &self.unit, &self.company_id)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Food updated successfully")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
