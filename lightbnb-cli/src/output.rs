//! Text rendering for command output

use lightbnb_db::{Property, PropertyListing, ReservationListing, SqlValue, Statement, User};
use rust_decimal::Decimal;
use serde::Serialize;

/// Minor units as a dollar amount, e.g. 93061 -> "$930.61"
pub fn format_cost(cost_per_night: i32) -> String {
    format!("${}", Decimal::new(cost_per_night.into(), 2))
}

fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| format!("{r:.2}"))
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_param(param: &SqlValue) -> String {
    match param {
        SqlValue::Int(v) => v.to_string(),
        SqlValue::Float(v) => v.to_string(),
        SqlValue::Numeric(v) => v.to_string(),
        SqlValue::Text(v) => format!("'{v}'"),
        SqlValue::Date(v) => format!("'{v}'"),
    }
}

pub fn print_statement(statement: &Statement) {
    println!("{}", statement.sql());
    println!();
    for (index, param) in statement.params().iter().enumerate() {
        println!("${} = {}", index + 1, format_param(param));
    }
}

pub fn print_listings(listings: &[PropertyListing]) {
    if listings.is_empty() {
        println!("No properties found.");
        return;
    }

    println!(
        "{:>5}  {:<32}  {:<18}  {:>10}  {:>6}  {:>3}",
        "ID", "TITLE", "CITY", "PER NIGHT", "RATING", "BR"
    );
    for listing in listings {
        let property = &listing.property;
        println!(
            "{:>5}  {:<32}  {:<18}  {:>10}  {:>6}  {:>3}",
            property.id,
            truncate(&property.title, 32),
            truncate(&property.city, 18),
            format_cost(property.cost_per_night),
            format_rating(listing.average_rating),
            property.number_of_bedrooms,
        );
    }
}

pub fn print_reservations(reservations: &[ReservationListing]) {
    if reservations.is_empty() {
        println!("No reservations found.");
        return;
    }

    for reservation in reservations {
        println!(
            "#{:<5} {} -> {}  {} ({}, {}) {} / night, rating {}",
            reservation.reservation_id,
            reservation.start_date,
            reservation.end_date,
            reservation.property.title,
            reservation.property.city,
            reservation.property.country,
            format_cost(reservation.property.cost_per_night),
            format_rating(reservation.average_rating),
        );
    }
}

pub fn print_user(user: &User) {
    println!("{:>5}  {}  <{}>", user.id, user.name, user.email);
}

pub fn print_property(property: &Property) {
    println!(
        "{:>5}  {}  {}, {}  {} / night",
        property.id,
        property.title,
        property.city,
        property.province,
        format_cost(property.cost_per_night)
    );
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
