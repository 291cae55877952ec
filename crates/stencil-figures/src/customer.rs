//! Figure 2.1: Customer use case diagram.
//!
//! Two actors on the left, eighteen use cases in six titled groups inside
//! the platform boundary, trunk connections from the Customer to each
//! group, limited Visitor access, and two «includes» relations.

use stencil_core::{
    color::Color,
    draw::{Direction, StrokeStyle},
    geometry::{Point, Size},
    model::{Connection, DiagramSpec, Element, ElementKind, ElementStyle},
};

const USE_CASE_SIZE: Size = Size::new(280.0, 60.0);

fn actor_style() -> ElementStyle {
    ElementStyle::new()
        .with_fill(Color::new("#E8F4FD").expect("valid color"))
        .with_border(Color::new("#1976D2").expect("valid color"))
        .with_border_width(3.0)
}

fn boundary_style() -> ElementStyle {
    ElementStyle::new()
        .with_fill(Color::new("#F8F9FA").expect("valid color"))
        .with_border(Color::new("#1976D2").expect("valid color"))
        .with_border_width(3.0)
}

fn group_style() -> ElementStyle {
    ElementStyle::new()
        .with_fill(Color::new("#FAFAFA").expect("valid color"))
        .with_border(Color::new("#E0E0E0").expect("valid color"))
        .with_border_width(1.0)
}

/// Build the customer use case diagram spec.
pub fn customer_usecase() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "Figure 2.1: Customer Use Case Diagram",
        Size::new(2200.0, 1300.0),
    );

    // System boundary first so the functional groups draw above it
    spec.add_element(
        Element::new(
            "platform",
            ElementKind::Group,
            "Car Rental Platform",
            Point::new(1300.0, 650.0),
            Size::new(1600.0, 1100.0),
        )
        .with_style(boundary_style()),
    );

    let groups: &[(&str, &str, Point, Size)] = &[
        (
            "authentication",
            "Authentication",
            Point::new(775.0, 300.0),
            Size::new(350.0, 200.0),
        ),
        (
            "browsing",
            "Vehicle Browsing",
            Point::new(1225.0, 300.0),
            Size::new(350.0, 200.0),
        ),
        (
            "booking",
            "Booking Flow",
            Point::new(1675.0, 300.0),
            Size::new(350.0, 200.0),
        ),
        (
            "management",
            "Booking Management",
            Point::new(800.0, 650.0),
            Size::new(400.0, 200.0),
        ),
        (
            "communication",
            "Communication",
            Point::new(1300.0, 650.0),
            Size::new(400.0, 200.0),
        ),
        (
            "content",
            "Content & Social",
            Point::new(1800.0, 650.0),
            Size::new(400.0, 200.0),
        ),
    ];
    for (id, label, position, size) in groups {
        spec.add_element(
            Element::new(*id, ElementKind::Group, *label, *position, *size)
                .with_parent("platform")
                .with_style(group_style()),
        );
    }

    for (id, label, position) in [
        ("customer", "Customer", Point::new(225.0, 440.0)),
        ("visitor", "Visitor", Point::new(225.0, 740.0)),
    ] {
        spec.add_element(
            Element::new(
                id,
                ElementKind::Actor,
                label,
                position,
                Size::new(250.0, 120.0),
            )
            .with_style(actor_style()),
        );
    }

    let use_cases: &[(&str, &str, &str, Point)] = &[
        ("login", "Login", "authentication", Point::new(775.0, 270.0)),
        (
            "register",
            "Register",
            "authentication",
            Point::new(775.0, 330.0),
        ),
        (
            "manage_profile",
            "Manage Profile",
            "authentication",
            Point::new(775.0, 390.0),
        ),
        (
            "browse_cars",
            "Browse Cars",
            "browsing",
            Point::new(1225.0, 270.0),
        ),
        (
            "search_vehicles",
            "Search Vehicles",
            "browsing",
            Point::new(1225.0, 330.0),
        ),
        (
            "check_availability",
            "Check Availability",
            "browsing",
            Point::new(1225.0, 390.0),
        ),
        (
            "book_vehicle",
            "Book Vehicle",
            "booking",
            Point::new(1675.0, 270.0),
        ),
        (
            "make_payment",
            "Make Payment",
            "booking",
            Point::new(1675.0, 330.0),
        ),
        (
            "download_contract",
            "Download Contract",
            "booking",
            Point::new(1675.0, 390.0),
        ),
        (
            "view_bookings",
            "View Bookings",
            "management",
            Point::new(800.0, 620.0),
        ),
        (
            "modify_booking",
            "Modify Booking",
            "management",
            Point::new(800.0, 680.0),
        ),
        (
            "cancel_booking",
            "Cancel Booking",
            "management",
            Point::new(800.0, 710.0),
        ),
        (
            "chat_with_agency",
            "Chat with Agency",
            "communication",
            Point::new(1300.0, 620.0),
        ),
        (
            "use_chatbot",
            "Use Chatbot",
            "communication",
            Point::new(1300.0, 680.0),
        ),
        (
            "receive_notifications",
            "Receive Notifications",
            "communication",
            Point::new(1300.0, 710.0),
        ),
        (
            "read_blog",
            "Read Blog",
            "content",
            Point::new(1800.0, 620.0),
        ),
        (
            "leave_comments",
            "Leave Comments",
            "content",
            Point::new(1800.0, 680.0),
        ),
        (
            "follow_agency",
            "Follow Agency",
            "content",
            Point::new(1800.0, 710.0),
        ),
    ];
    for (id, label, parent, position) in use_cases {
        spec.add_element(
            Element::new(*id, ElementKind::Node, *label, *position, USE_CASE_SIZE)
                .with_parent(*parent),
        );
    }

    // Customer trunk lines, one per functional group
    for group in [
        "authentication",
        "browsing",
        "booking",
        "management",
        "communication",
        "content",
    ] {
        spec.add_connection(
            Connection::new("customer", group).with_style(StrokeStyle::Dashed),
        );
    }

    // Visitor reaches only the public use cases
    for target in ["register", "browse_cars", "use_chatbot", "read_blog"] {
        spec.add_connection(Connection::new("visitor", target).with_style(StrokeStyle::Dotted));
    }

    spec.add_connection(
        Connection::new("login", "manage_profile")
            .with_direction(Direction::Forward)
            .with_label("\u{ab}includes\u{bb}"),
    );
    spec.add_connection(
        Connection::new("check_availability", "book_vehicle")
            .with_direction(Direction::Forward)
            .with_label("\u{ab}includes\u{bb}"),
    );

    spec
}
