//! Customer list: search across every field, sort by column, render.

use crate::error::{ConsoleError, ConsoleResult};
use traineeapp_client::Customer;

pub const COLUMNS: &[&str] = &[
    "id",
    "firstname",
    "lastname",
    "email",
    "streetaddress",
    "postcode",
    "city",
    "phone",
];

/// Keep customers with any field containing `query`, case-insensitively.
/// Mirrors the original console's single search box.
pub fn filter(customers: &[Customer], query: &str) -> Vec<Customer> {
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            [
                &c.firstname,
                &c.lastname,
                &c.email,
                &c.streetaddress,
                &c.postcode,
                &c.city,
                &c.phone,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Sort in place by a column name from [`COLUMNS`].
pub fn sort_by_column(customers: &mut [Customer], column: &str) -> ConsoleResult<()> {
    match column {
        "id" => customers.sort_by_key(|c| c.id()),
        "firstname" => customers.sort_by(|a, b| a.firstname.cmp(&b.firstname)),
        "lastname" => customers.sort_by(|a, b| a.lastname.cmp(&b.lastname)),
        "email" => customers.sort_by(|a, b| a.email.cmp(&b.email)),
        "streetaddress" => customers.sort_by(|a, b| a.streetaddress.cmp(&b.streetaddress)),
        "postcode" => customers.sort_by(|a, b| a.postcode.cmp(&b.postcode)),
        "city" => customers.sort_by(|a, b| a.city.cmp(&b.city)),
        "phone" => customers.sort_by(|a, b| a.phone.cmp(&b.phone)),
        other => {
            return Err(ConsoleError::InvalidArgument(format!(
                "unknown customer column '{}', expected one of: {}",
                other,
                COLUMNS.join(", ")
            )));
        }
    }
    Ok(())
}

pub fn render(customers: &[Customer]) -> String {
    let headers = [
        "Id",
        "First name",
        "Last name",
        "Email",
        "Street address",
        "Postcode",
        "City",
        "Phone",
    ];
    let rows: Vec<Vec<String>> = customers
        .iter()
        .map(|c| {
            vec![
                c.id().map(|id| id.to_string()).unwrap_or_default(),
                c.firstname.clone(),
                c.lastname.clone(),
                c.email.clone(),
                c.streetaddress.clone(),
                c.postcode.clone(),
                c.city.clone(),
                c.phone.clone(),
            ]
        })
        .collect();
    super::render_table(&headers, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(first: &str, last: &str, city: &str, id: u64) -> Customer {
        serde_json::from_value(json!({
            "firstname": first,
            "lastname": last,
            "city": city,
            "links": [{"rel": "self", "href": format!("http://x/api/customers/{id}")}]
        }))
        .expect("customer")
    }

    #[test]
    fn filter_matches_any_field_case_insensitively() {
        let customers = vec![
            customer("Aino", "Virtanen", "Helsinki", 1),
            customer("Pekka", "Korhonen", "Espoo", 2),
        ];
        let hits = filter(&customers, "helsi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].firstname, "Aino");
        assert_eq!(filter(&customers, "KORHONEN").len(), 1);
        assert_eq!(filter(&customers, "").len(), 2);
        assert!(filter(&customers, "tampere").is_empty());
    }

    #[test]
    fn sort_by_lastname() {
        let mut customers = vec![
            customer("Pekka", "Korhonen", "Espoo", 2),
            customer("Aino", "Virtanen", "Helsinki", 1),
            customer("Liisa", "Aalto", "Turku", 3),
        ];
        sort_by_column(&mut customers, "lastname").expect("sort");
        assert_eq!(customers[0].lastname, "Aalto");
        assert_eq!(customers[2].lastname, "Virtanen");
    }

    #[test]
    fn sort_rejects_unknown_column() {
        let mut customers = vec![customer("Aino", "Virtanen", "Helsinki", 1)];
        let err = sort_by_column(&mut customers, "shoe_size").expect_err("err");
        assert!(err.to_string().contains("shoe_size"));
    }

    #[test]
    fn render_includes_derived_id() {
        let out = render(&[customer("Aino", "Virtanen", "Helsinki", 197)]);
        assert!(out.contains("197"));
        assert!(out.contains("Virtanen"));
    }
}
