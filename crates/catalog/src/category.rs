use chrono::{DateTime, Utc};
use tracing::debug;

use codeflix_core::{CategoryId, Entity};

use crate::validation::{self, CategoryError};

/// Entity: Category.
///
/// Always valid: every constructor and mutator checks the field rules and
/// refuses to produce (or leave behind) a category that breaks them.
/// Equality is by identity.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

/// Unchecked category data as it arrives from outside the domain.
///
/// `None` stands for a missing value; `is_active` defaults to `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl Category {
    /// Create an active category.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CategoryError> {
        Self::with_status(name, description, true)
    }

    /// Create a category with an explicit active flag.
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, CategoryError> {
        Self::create(Some(name.into()), Some(description.into()), is_active)
    }

    fn create(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, CategoryError> {
        let (name, description) = validation::validated(name, description).map_err(rejected)?;

        let category = Self {
            id: CategoryId::new(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        };
        debug!(category_id = %category.id, is_active, "category created");
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) -> Result<(), CategoryError> {
        self.is_active = true;
        self.validate()?;
        debug!(category_id = %self.id, "category activated");
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<(), CategoryError> {
        self.is_active = false;
        self.validate()?;
        debug!(category_id = %self.id, "category deactivated");
        Ok(())
    }

    /// Replace the name and, when given, the description.
    ///
    /// The new values are checked before anything is assigned, so a rejected
    /// update leaves the category exactly as it was.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), CategoryError> {
        let name = name.into();
        let next_description = description.as_deref().unwrap_or(&self.description);
        validation::check(&name, next_description).map_err(rejected)?;

        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
        debug!(category_id = %self.id, "category updated");
        Ok(())
    }

    fn validate(&self) -> Result<(), CategoryError> {
        validation::check(&self.name, &self.description).map_err(rejected)
    }
}

fn rejected(err: CategoryError) -> CategoryError {
    debug!(rule = err.rule(), error = %err, "category rejected");
    err
}

impl TryFrom<CategoryInput> for Category {
    type Error = CategoryError;

    fn try_from(input: CategoryInput) -> Result<Self, Self::Error> {
        Self::create(input.name, input.description, input.is_active.unwrap_or(true))
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Category {}
