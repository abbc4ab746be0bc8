use crate::content::{ContentTree, FLAT_SECTION};

type Fields = &'static [(&'static str, &'static str)];
type Sections = &'static [(&'static str, Fields)];

const HOME: Sections = &[
    (
        "hero",
        &[
            ("title", "Discover Your Dream Property in the Caribbean"),
            (
                "subtitle",
                "Luxury villas, beachfront homes and investment opportunities hand-picked by local experts",
            ),
            ("primaryButton", "Browse Properties"),
            ("secondaryButton", "Contact an Agent"),
        ],
    ),
    (
        "featured",
        &[
            ("title", "Featured Properties"),
            ("subtitle", "A selection of our most sought-after listings"),
            ("viewAll", "View All Properties"),
        ],
    ),
    (
        "whyUs",
        &[
            ("title", "Why Choose Us"),
            ("localTitle", "Local Expertise"),
            (
                "localText",
                "Over fifteen years helping buyers find the right home on the island",
            ),
            ("legalTitle", "Legal Guidance"),
            (
                "legalText",
                "Trusted lawyers and notaries guide every purchase from offer to title",
            ),
            ("supportTitle", "Full Support"),
            (
                "supportText",
                "From the first viewing to handing over the keys, we are with you",
            ),
        ],
    ),
    (
        "cta",
        &[
            ("title", "Ready to Find Your Paradise?"),
            (
                "subtitle",
                "Tell us what you are looking for and we will arrange private viewings",
            ),
            ("button", "Get in Touch"),
        ],
    ),
];

const ABOUT: Sections = &[
    (
        "hero",
        &[
            ("title", "About Us"),
            ("subtitle", "Your trusted partner in Caribbean real estate"),
        ],
    ),
    (
        "story",
        &[
            ("title", "Our Story"),
            (
                "text",
                "Founded by a family of island residents, our brokerage has grown into a full-service agency for buyers, sellers and investors",
            ),
        ],
    ),
    (
        "mission",
        &[
            ("title", "Our Mission"),
            (
                "text",
                "To make buying property abroad simple, transparent and safe",
            ),
        ],
    ),
];

const PROPERTIES: Sections = &[(
    "hero",
    &[
        ("title", "Our Properties"),
        (
            "subtitle",
            "Villas, condos, land and commercial space across the island",
        ),
    ],
)];

const SERVICES: Sections = &[(
    "hero",
    &[
        ("title", "Our Services"),
        (
            "subtitle",
            "Everything you need to buy, sell, rent or invest with confidence",
        ),
    ],
)];

const BLOG: Sections = &[(
    "hero",
    &[
        ("title", "Blog & News"),
        (
            "subtitle",
            "Market updates, buying guides and life on the island",
        ),
    ],
)];

const CONTACT: Sections = &[
    (
        "hero",
        &[
            ("title", "Contact Us"),
            (
                "subtitle",
                "Send us a message and an agent will reply within one business day",
            ),
        ],
    ),
    (
        "info",
        &[
            ("phone", "+1 (809) 555-0142"),
            ("email", "info@caribbeanrealty.example"),
            ("address", "Calle Principal 12, Sosua, Dominican Republic"),
            ("hours", "Monday to Saturday, 9:00 to 18:00"),
        ],
    ),
];

const FOOTER: Sections = &[(
    "brand",
    &[
        ("name", "Caribbean Realty"),
        (
            "tagline",
            "Helping you find your place in the sun since 2009",
        ),
        ("copyright", "All rights reserved."),
    ],
)];

/// Service detail pages carry their fields directly, without sections
const SERVICE_PAGES: &[(&str, Fields)] = &[
    (
        "service-property-sales",
        &[
            ("title", "Property Sales"),
            (
                "description",
                "Buy or sell homes, villas and land with an agent who knows every neighbourhood",
            ),
        ],
    ),
    (
        "service-property-management",
        &[
            ("title", "Property Management"),
            (
                "description",
                "Maintenance, cleaning, guest check-in and owner reporting while you are away",
            ),
        ],
    ),
    (
        "service-investment-consulting",
        &[
            ("title", "Investment Consulting"),
            (
                "description",
                "Rental yield analysis and market research for buyers looking for returns",
            ),
        ],
    ),
    (
        "service-legal-assistance",
        &[
            ("title", "Legal Assistance"),
            (
                "description",
                "Title searches, contracts and residency paperwork through trusted local lawyers",
            ),
        ],
    ),
    (
        "service-relocation",
        &[
            ("title", "Relocation Services"),
            (
                "description",
                "Schools, banking, utilities and everything else needed to settle in",
            ),
        ],
    ),
    (
        "service-vacation-rentals",
        &[
            ("title", "Vacation Rentals"),
            (
                "description",
                "Short-term rentals of hand-picked villas and condos for holidays on the coast",
            ),
        ],
    ),
];

/// The copy the site ships with
pub fn site_defaults() -> ContentTree {
    let mut tree = ContentTree::new();

    let sectioned: &[(&str, Sections)] = &[
        ("home", HOME),
        ("about", ABOUT),
        ("properties", PROPERTIES),
        ("services", SERVICES),
        ("blog", BLOG),
        ("contact", CONTACT),
        ("footer", FOOTER),
    ];

    for (page, sections) in sectioned {
        for (section, fields) in sections.iter() {
            for (field, text) in fields.iter() {
                tree.set(*page, *section, *field, *text);
            }
        }
    }

    for (page, fields) in SERVICE_PAGES {
        for (field, text) in fields.iter() {
            tree.set(*page, FLAT_SECTION, *field, *text);
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_tree;

    #[test]
    fn home_hero_title_is_the_shipped_headline() {
        assert_eq!(
            site_defaults().get("home", "hero", "title"),
            Some("Discover Your Dream Property in the Caribbean")
        );
    }

    #[test]
    fn defaults_pass_their_own_shape_check() {
        let defaults = site_defaults();
        assert_eq!(parse_tree(&defaults.to_value()).unwrap(), defaults);
    }

    #[test]
    fn service_pages_are_flat() {
        let defaults = site_defaults();
        let page = defaults.page("service-relocation").unwrap();

        assert_eq!(page.len(), 1);
        assert!(page.contains_key(FLAT_SECTION));
    }
}
