//! Submitted form payloads and their validation.
//!
//! Each form holds the raw strings as posted so a rejected submission can be
//! re-rendered with the visitor's input intact. `validate()` produces the typed
//! API payload; a form that fails validation is never sent upstream.

use serde::{Deserialize, Serialize};

use crate::types::{
    Category, CategoryInput, Collection, CollectionInput, ContactInput, Email, Faq, FaqInput,
    Placeholder, PlaceholderInput, Price, Product, ProductInput,
};

/// Why a form submission was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl FormError {
    /// Name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required(field) | Self::Invalid { field, .. } => field,
        }
    }

    fn invalid(field: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            field,
            reason: reason.to_string(),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Storefront contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactInput, FormError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let email = Email::parse(&email).map_err(|e| FormError::invalid("email", e))?;
        let message = required("message", &self.message)?;

        Ok(ContactInput {
            name,
            email,
            phone: self.phone.trim().to_string(),
            message,
        })
    }
}

/// Admin product form. Images are handled separately by the upload flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub description: String,
    pub color: String,
    pub dimensions: String,
    pub material: String,
    /// Comma-separated.
    pub features: String,
    pub featured: bool,
}

impl ProductForm {
    /// Validate into an API payload with an empty gallery.
    pub fn validate(&self) -> Result<ProductInput, FormError> {
        let name = required("name", &self.name)?;
        let category = required("category", &self.category)?;
        let price = required("price", &self.price)?;
        let price = Price::parse(&price).map_err(|e| FormError::invalid("price", e))?;

        let rating = match self.rating.trim() {
            "" => 0.0,
            raw => {
                let rating: f64 = raw
                    .replace(',', ".")
                    .parse()
                    .map_err(|_| FormError::invalid("rating", "must be a number"))?;
                if !(0.0..=5.0).contains(&rating) {
                    return Err(FormError::invalid("rating", "must be between 0 and 5"));
                }
                rating
            }
        };

        let reviews = match self.reviews.trim() {
            "" => 0,
            raw => raw
                .parse::<u32>()
                .ok()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| FormError::invalid("reviews", "must be a whole number"))?,
        };

        Ok(ProductInput {
            name,
            category,
            price,
            rating,
            reviews,
            description: self.description.trim().to_string(),
            image: String::new(),
            images: Vec::new(),
            color: self.color.trim().to_string(),
            dimensions: self.dimensions.trim().to_string(),
            material: self.material.trim().to_string(),
            features: split_features(&self.features),
            featured: self.featured,
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.input_value(),
            rating: product.rating.to_string(),
            reviews: product.reviews.to_string(),
            description: product.description.clone(),
            color: product.color.clone(),
            dimensions: product.dimensions.clone(),
            material: product.material.clone(),
            features: product.features.join(", "),
            featured: product.featured,
        }
    }
}

/// Admin category form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub href: String,
    /// Current image path, replaced when a new file is uploaded.
    pub image: String,
}

impl CategoryForm {
    pub fn validate(&self) -> Result<CategoryInput, FormError> {
        Ok(CategoryInput {
            name: required("name", &self.name)?,
            description: self.description.trim().to_string(),
            icon: self.icon.trim().to_string(),
            href: self.href.trim().to_string(),
            image: self.image.trim().to_string(),
        })
    }
}

impl From<&Category> for CategoryForm {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            href: category.href.clone(),
            image: category.image.clone(),
        }
    }
}

/// Admin collection form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionForm {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl CollectionForm {
    /// Check required fields before a new image is uploaded.
    ///
    /// `has_new_image` stands in for an empty `image` that the pending upload
    /// will fill.
    pub fn check(&self, has_new_image: bool) -> Result<(), FormError> {
        required("name", &self.name)?;
        if !has_new_image {
            required("image", &self.image)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<CollectionInput, FormError> {
        Ok(CollectionInput {
            name: required("name", &self.name)?,
            description: self.description.trim().to_string(),
            image: required("image", &self.image)?,
        })
    }
}

impl From<&Collection> for CollectionForm {
    fn from(collection: &Collection) -> Self {
        Self {
            name: collection.name.clone(),
            description: collection.description.clone(),
            image: collection.image.clone(),
        }
    }
}

/// Admin FAQ form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
    pub order: String,
}

impl FaqForm {
    pub fn validate(&self) -> Result<FaqInput, FormError> {
        let question = required("question", &self.question)?;
        let answer = required("answer", &self.answer)?;
        let order = match self.order.trim() {
            "" => 0,
            raw => raw
                .parse()
                .map_err(|_| FormError::invalid("order", "must be a whole number"))?,
        };
        Ok(FaqInput {
            question,
            answer,
            order,
        })
    }
}

impl From<&Faq> for FaqForm {
    fn from(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            order: faq.order.to_string(),
        }
    }
}

/// Admin placeholder form.
///
/// Fields default individually: an unchecked `is_active` box is absent from
/// the post and must read as `false`, not as the new-placeholder default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderForm {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for PlaceholderForm {
    fn default() -> Self {
        Self::from(&PlaceholderInput::default())
    }
}

impl PlaceholderForm {
    pub fn validate(&self) -> Result<PlaceholderInput, FormError> {
        let path = required("path", &self.path)?;
        if !path.starts_with('/') {
            return Err(FormError::invalid("path", "must start with /"));
        }
        Ok(PlaceholderInput {
            path,
            title: required("title", &self.title)?,
            message: self.message.trim().to_string(),
            is_active: self.is_active,
        })
    }
}

impl From<&PlaceholderInput> for PlaceholderForm {
    fn from(input: &PlaceholderInput) -> Self {
        Self {
            path: input.path.clone(),
            title: input.title.clone(),
            message: input.message.clone(),
            is_active: input.is_active,
        }
    }
}

impl From<&Placeholder> for PlaceholderForm {
    fn from(placeholder: &Placeholder) -> Self {
        Self::from(&PlaceholderInput::from(placeholder))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Anna".to_string(),
            email: "anna@hotel.ru".to_string(),
            phone: String::new(),
            message: "Need 40 beds".to_string(),
        }
    }

    #[test]
    fn test_contact_valid() {
        let input = contact().validate().unwrap();
        assert_eq!(input.email.as_str(), "anna@hotel.ru");
    }

    #[test]
    fn test_contact_required_fields() {
        let mut form = contact();
        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("name")));

        let mut form = contact();
        form.message.clear();
        assert_eq!(form.validate(), Err(FormError::Required("message")));
    }

    #[test]
    fn test_contact_bad_email() {
        let mut form = contact();
        form.email = "anna".to_string();
        assert_eq!(form.validate().unwrap_err().field(), "email");
    }

    #[test]
    fn test_product_minimal() {
        let form = ProductForm {
            name: "Oak table".to_string(),
            category: "Tables".to_string(),
            price: "1499".to_string(),
            features: " solid oak, , oiled ,".to_string(),
            ..ProductForm::default()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.price.amount(), Decimal::new(1499, 0));
        assert_eq!(input.features, vec!["solid oak", "oiled"]);
        assert!((input.rating - 0.0).abs() < f64::EPSILON);
        assert_eq!(input.reviews, 0);
        assert!(input.images.is_empty());
    }

    #[test]
    fn test_product_rejects_bad_numbers() {
        let base = ProductForm {
            name: "Oak table".to_string(),
            category: "Tables".to_string(),
            price: "1499".to_string(),
            ..ProductForm::default()
        };

        let form = ProductForm {
            price: String::new(),
            ..base.clone()
        };
        assert_eq!(form.validate(), Err(FormError::Required("price")));

        let form = ProductForm {
            rating: "7".to_string(),
            ..base.clone()
        };
        assert_eq!(form.validate().unwrap_err().field(), "rating");

        let form = ProductForm {
            reviews: "-3".to_string(),
            ..base
        };
        assert_eq!(form.validate().unwrap_err().field(), "reviews");
    }

    #[test]
    fn test_collection_requires_image() {
        let form = CollectionForm {
            name: "Lobby".to_string(),
            ..CollectionForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::Required("image")));
    }

    #[test]
    fn test_collection_check_accepts_pending_upload() {
        let form = CollectionForm {
            name: "Lobby".to_string(),
            ..CollectionForm::default()
        };
        assert!(form.check(true).is_ok());
        assert_eq!(form.check(false), Err(FormError::Required("image")));
        assert_eq!(
            CollectionForm::default().check(true),
            Err(FormError::Required("name"))
        );
    }

    #[test]
    fn test_category_requires_name() {
        assert_eq!(
            CategoryForm::default().validate(),
            Err(FormError::Required("name"))
        );
    }

    #[test]
    fn test_faq_order_defaults_to_zero() {
        let form = FaqForm {
            question: "Delivery?".to_string(),
            answer: "Yes".to_string(),
            order: String::new(),
        };
        assert_eq!(form.validate().unwrap().order, 0);
    }

    #[test]
    fn test_placeholder_defaults_and_path() {
        let form = PlaceholderForm::default();
        assert!(form.is_active);
        assert_eq!(form.validate(), Err(FormError::Required("path")));

        let form = PlaceholderForm {
            path: "portfolio".to_string(),
            ..PlaceholderForm::default()
        };
        assert_eq!(form.validate().unwrap_err().field(), "path");

        let form = PlaceholderForm {
            path: "/portfolio".to_string(),
            ..PlaceholderForm::default()
        };
        assert!(form.validate().unwrap().is_active);
    }

    #[test]
    fn test_split_features() {
        assert!(split_features(" , ").is_empty());
        assert_eq!(split_features("a,b"), vec!["a", "b"]);
    }
}
