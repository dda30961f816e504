//! Customer entity.

use crate::error::RecordError;
use crate::record::{Entity, Record, RecordReader};

/// A customer who can hold reservations. No cross-field invariant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Customer {
    id: String,
    name: String,
    email: String,
    phone: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Replace whichever contact fields are provided.
    pub fn update_contact(
        &mut self,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
    }
}

impl Entity for Customer {
    const COLLECTION: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_record(record: &Record) -> Result<Self, RecordError> {
        let reader = RecordReader::new(record);
        Ok(Customer::new(
            reader.string("id")?,
            reader.string("name")?,
            reader.string("email")?,
            reader.string("phone")?,
        ))
    }
}
