//! Signup form draft record and its field descriptors.
//!
//! DESIGN
//! ======
//! The record is a flat set of strings serialized with camelCase keys. Every
//! field is `#[serde(default)]` so drafts written before a field existed
//! still load, with the new field empty.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use serde::{Deserialize, Serialize};

/// In-progress signup form values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftFormRecord {
    pub name: String,
    pub company_name: String,
    pub company_email: String,
    pub company_website: String,
    pub company_size: String,
    pub phone: String,
    pub password: String,
}

impl DraftFormRecord {
    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        SignupField::ALL.iter().all(|f| f.value(self).is_empty())
    }

    /// First field, in form order, that is empty after trimming.
    pub fn first_missing(&self) -> Option<SignupField> {
        SignupField::ALL.into_iter().find(|f| f.value(self).trim().is_empty())
    }
}

/// One input of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignupField {
    Name,
    CompanyName,
    CompanyEmail,
    CompanyWebsite,
    CompanySize,
    Phone,
    Password,
}

impl SignupField {
    /// All fields in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::CompanyName,
        Self::CompanyEmail,
        Self::CompanyWebsite,
        Self::CompanySize,
        Self::Phone,
        Self::Password,
    ];

    /// Key used for this field in the serialized record.
    pub fn storage_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CompanyName => "companyName",
            Self::CompanyEmail => "companyEmail",
            Self::CompanyWebsite => "companyWebsite",
            Self::CompanySize => "companySize",
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::CompanyName => "Company name",
            Self::CompanyEmail => "Company email",
            Self::CompanyWebsite => "Company website",
            Self::CompanySize => "Company size",
            Self::Phone => "Phone number",
            Self::Password => "Password",
        }
    }

    /// HTML `type` attribute for the field's `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::CompanyEmail => "email",
            Self::CompanyWebsite => "url",
            Self::Phone => "tel",
            Self::Password => "password",
            Self::Name | Self::CompanyName | Self::CompanySize => "text",
        }
    }

    pub fn value(self, record: &DraftFormRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::CompanyName => &record.company_name,
            Self::CompanyEmail => &record.company_email,
            Self::CompanyWebsite => &record.company_website,
            Self::CompanySize => &record.company_size,
            Self::Phone => &record.phone,
            Self::Password => &record.password,
        }
    }

    pub fn set(self, record: &mut DraftFormRecord, value: String) {
        let slot = match self {
            Self::Name => &mut record.name,
            Self::CompanyName => &mut record.company_name,
            Self::CompanyEmail => &mut record.company_email,
            Self::CompanyWebsite => &mut record.company_website,
            Self::CompanySize => &mut record.company_size,
            Self::Phone => &mut record.phone,
            Self::Password => &mut record.password,
        };
        *slot = value;
    }
}
