//! Built-in demo page
//!
//! Mirrors the ROOTS marketing site: hero, products, process, stats, and
//! contact sections. Used when no page file is given on the command line.

use super::block::Block;
use super::document::{Page, Section};

pub fn demo_page() -> Page {
    Page::new(vec![
        Section::new(
            &["hero"],
            Some("home"),
            vec![
                Block::spacer(2),
                Block::new(
                    &["hero-content"],
                    &[
                        "R O O T S",
                        "From Bharat's fields to India's tables",
                        "Tableware engineered from agricultural waste",
                    ],
                )
                .with_height(4),
                Block::spacer(3),
            ],
        ),
        Section::new(
            &["products"],
            Some("products"),
            vec![
                Block::new(&["section-heading", "reveal"], &["Our Products"]).with_height(2),
                Block::new(&["product-image"], &[]).with_height(3),
                Block::new(
                    &["product-card", "reveal"],
                    &["Bagasse Dinner Plates", "Sturdy, compostable, field-born"],
                )
                .with_height(3),
                Block::new(&["product-image"], &[]).with_height(3),
                Block::new(
                    &["product-card", "reveal"],
                    &["Rice Husk Bowls", "Warm to the touch, kind to the soil"],
                )
                .with_height(3),
                Block::new(&["product-image"], &[]).with_height(3),
                Block::new(
                    &["product-card", "reveal"],
                    &["Wheat Straw Cutlery", "Strength without the plastic"],
                )
                .with_height(4),
            ],
        ),
        Section::new(
            &["process"],
            Some("process"),
            vec![
                Block::new(&["section-heading", "reveal"], &["How It's Made"]).with_height(2),
                Block::new(
                    &["process-step", "reveal"],
                    &["1. Collect", "Crop residue gathered from partner farms"],
                )
                .with_height(3),
                Block::new(
                    &["process-step", "reveal"],
                    &["2. Press", "Fibre pulped and moulded under heat"],
                )
                .with_height(3),
                Block::new(
                    &["process-step", "reveal"],
                    &["3. Deliver", "Finished ware shipped across India"],
                )
                .with_height(4),
            ],
        ),
        Section::new(
            &["why-stats"],
            Some("why"),
            vec![
                Block::new(&["section-heading", "reveal"], &["Why It Matters"]).with_height(2),
                Block::new(&["stat-number"], &["10M"]),
                Block::new(&["stat-label"], &["tonnes of stubble diverted from burning"])
                    .with_height(2),
                Block::new(&["stat-number"], &["500+"]),
                Block::new(&["stat-label"], &["partner farms and growing"]).with_height(2),
                Block::new(&["stat-number"], &["₹0"]),
                Block::new(&["stat-label"], &["cost to the soil"]).with_height(3),
            ],
        ),
        Section::new(
            &["contact"],
            Some("contact"),
            vec![
                Block::new(&["section-heading", "reveal"], &["Get In Touch"]).with_height(2),
                Block::new(&["form-actions"], &["[ Write to us ]"]).with_height(2),
                Block::new(&["btn-sample-kit"], &["[ Request a sample kit ]"]).with_height(3),
            ],
        ),
        Section::new(
            &["footer"],
            None,
            vec![
                Block::new(
                    &["footer-note"],
                    &["Pravaahya - transforming agricultural waste into engineered luxury"],
                )
                .with_height(2),
            ],
        ),
    ])
}
