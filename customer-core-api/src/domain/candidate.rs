use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use super::category::Category;

/// Vietnamese mobile number: `0`, then one of 3/5/7/8/9, then 8 more digits.
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[35789][0-9]{8}$").expect("phone pattern is valid"));

pub const NAME_REQUIRED: &str = "Vui lòng nhập tên khách hàng";
pub const PRODUCT_REQUIRED: &str = "Vui lòng nhập sản phẩm";
pub const PHONE_REQUIRED: &str = "Vui lòng nhập số điện thoại";
pub const PHONE_INVALID: &str = "Số điện thoại không hợp lệ";

/// Customer fields as submitted by a caller, before an id and timestamp
/// are assigned. Fields must already be trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerCandidate {
    #[validate(length(min = 1, message = "Vui lòng nhập tên khách hàng"))]
    pub name: String,

    #[validate(length(min = 1, message = "Vui lòng nhập sản phẩm"))]
    pub product: String,

    #[validate(
        length(min = 1, message = "Vui lòng nhập số điện thoại"),
        regex(path = *PHONE_PATTERN, message = "Số điện thoại không hợp lệ")
    )]
    pub phone: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub note: Option<String>,
}

impl CustomerCandidate {
    pub fn new(name: &str, product: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            product: product.to_string(),
            phone: phone.to_string(),
            category: Category::Regular,
            note: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}
