//! Customer subcommands.

use anyhow::Result;
use booking_core::{Customer, Entity};
use booking_runtime::{
    CustomerUpdate, NewCustomer, Store, create_customer, delete_customer, update_customer,
};
use clap::Parser;

use crate::output::{OutputFormat, print_collection, print_outcome};

#[derive(Parser)]
pub enum CustomerCommand {
    /// List customers
    List {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Create a customer
    Create {
        /// Customer id (e.g. C010)
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Update contact details
    Update {
        #[arg(value_name = "CUSTOMER_ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a customer without active reservations
    Delete {
        #[arg(value_name = "CUSTOMER_ID")]
        id: String,
    },
}

impl CustomerCommand {
    pub fn execute(self, store: &Store) -> Result<()> {
        match self {
            Self::List { format } => {
                let customers = store.customers().load_all().items;
                print_collection(&customers, format, "No customers.", describe)
            }
            Self::Create {
                id,
                name,
                email,
                phone,
            } => {
                let outcome = create_customer(
                    store,
                    NewCustomer {
                        id,
                        name,
                        email,
                        phone,
                    },
                );
                print_outcome(&outcome);
                Ok(())
            }
            Self::Update {
                id,
                name,
                email,
                phone,
            } => {
                let update = CustomerUpdate { name, email, phone };
                print_outcome(&update_customer(store, &id, update));
                Ok(())
            }
            Self::Delete { id } => {
                print_outcome(&delete_customer(store, &id));
                Ok(())
            }
        }
    }
}

fn describe(customer: &Customer) -> String {
    format!(
        "{} | {} | {} | {}",
        customer.id(),
        customer.name(),
        customer.email(),
        customer.phone()
    )
}
