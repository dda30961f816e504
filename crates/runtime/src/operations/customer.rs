//! Customer lifecycle: create, update contact details, delete.

use booking_core::{Customer, Entity, Reservation, find_by_id, find_by_id_mut};

use super::outcome::{Outcome, Rejection};
use crate::store::Store;

/// Raw user-supplied fields for a new customer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Contact fields to replace; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

fn active_for_customer(reservations: &[Reservation], customer_id: &str) -> usize {
    reservations
        .iter()
        .filter(|r| r.is_active() && r.customer_id() == customer_id)
        .count()
}

/// Add a customer, refusing ids that already exist.
pub fn create_customer(store: &Store, request: NewCustomer) -> Outcome<Customer> {
    let mut diagnostics = Vec::new();
    let mut customers = store.customers().load_all().drain_into(&mut diagnostics);

    if find_by_id(&customers, &request.id).is_some() {
        return Outcome::rejected(Rejection::DuplicateCustomer(request.id), diagnostics);
    }

    let customer = Customer::new(request.id, request.name, request.email, request.phone);
    customers.push(customer.clone());
    diagnostics.extend(store.customers().save_all(&customers));

    let status = format!("customer {} created", customer.id());
    Outcome::accepted(customer, status, diagnostics)
}

/// Replace a customer's contact details.
pub fn update_customer(store: &Store, customer_id: &str, update: CustomerUpdate) -> Outcome<Customer> {
    let mut diagnostics = Vec::new();
    let mut customers = store.customers().load_all().drain_into(&mut diagnostics);

    let Some(customer) = find_by_id_mut(&mut customers, customer_id) else {
        return Outcome::rejected(
            Rejection::CustomerNotFound(customer_id.to_owned()),
            diagnostics,
        );
    };
    customer.update_contact(update.name, update.email, update.phone);
    let customer = customer.clone();

    diagnostics.extend(store.customers().save_all(&customers));

    let status = format!("customer {} updated", customer_id);
    Outcome::accepted(customer, status, diagnostics)
}

/// Remove a customer that no ACTIVE reservation references.
pub fn delete_customer(store: &Store, customer_id: &str) -> Outcome<Customer> {
    let mut diagnostics = Vec::new();
    let mut customers = store.customers().load_all().drain_into(&mut diagnostics);

    let Some(index) = customers.iter().position(|c| c.id() == customer_id) else {
        return Outcome::rejected(
            Rejection::CustomerNotFound(customer_id.to_owned()),
            diagnostics,
        );
    };

    let reservations = store.reservations().load_all().drain_into(&mut diagnostics);
    let active = active_for_customer(&reservations, customer_id);
    if active > 0 {
        return Outcome::rejected(
            Rejection::CustomerHasActiveReservations {
                customer_id: customer_id.to_owned(),
                active,
            },
            diagnostics,
        );
    }

    let customer = customers.remove(index);
    diagnostics.extend(store.customers().save_all(&customers));

    let status = format!("customer {} deleted", customer_id);
    Outcome::accepted(customer, status, diagnostics)
}
