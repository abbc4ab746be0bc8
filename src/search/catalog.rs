use crate::models::{ServiceEntry, StaticPage};

/// Public pages offered as search results
pub const STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        title: "Home",
        url: "/",
        content: "Discover your dream property in the Caribbean. Luxury villas, beachfront homes and investment opportunities.",
        keywords: &["home", "main", "caribbean", "luxury", "real estate", "dream property"],
    },
    StaticPage {
        title: "About Us",
        url: "/about",
        content: "Learn about our team, our story and our mission to make buying property abroad simple and safe.",
        keywords: &["about", "team", "company", "story", "mission", "agents"],
    },
    StaticPage {
        title: "Properties",
        url: "/properties",
        content: "Browse all villas, houses, condos, apartments, land and commercial properties for sale.",
        keywords: &["properties", "listings", "for sale", "buy", "homes", "villas"],
    },
    StaticPage {
        title: "Contact",
        url: "/contact",
        content: "Get in touch with our agents by phone, email or the contact form to arrange a viewing.",
        keywords: &["contact", "phone", "email", "viewing", "appointment", "message"],
    },
];

/// Services offered as search results
pub const SERVICES: &[ServiceEntry] = &[
    StaticPage {
        title: "Property Sales",
        url: "/services/property-sales",
        content: "Buy or sell homes, villas and land with an agent who knows every neighbourhood.",
        keywords: &["sales", "buy", "sell", "purchase", "selling"],
    },
    StaticPage {
        title: "Property Management",
        url: "/services/property-management",
        content: "Maintenance, cleaning, guest check-in and owner reporting while you are away.",
        keywords: &["management", "maintenance", "cleaning", "owners", "caretaker"],
    },
    StaticPage {
        title: "Investment Consulting",
        url: "/services/investment-consulting",
        content: "Rental yield analysis and market research for buyers looking for returns.",
        keywords: &["investment", "roi", "yield", "returns", "market analysis"],
    },
    StaticPage {
        title: "Legal Assistance",
        url: "/services/legal-assistance",
        content: "Title searches, contracts and residency paperwork through trusted local lawyers.",
        keywords: &["legal", "lawyer", "notary", "title", "contract", "residency"],
    },
    StaticPage {
        title: "Relocation Services",
        url: "/services/relocation",
        content: "Schools, banking, utilities and everything else needed to settle in.",
        keywords: &["relocation", "moving", "schools", "banking", "expat"],
    },
    StaticPage {
        title: "Vacation Rentals",
        url: "/services/vacation-rentals",
        content: "Short-term rentals of hand-picked villas and condos for holidays on the coast.",
        keywords: &["rental", "rent", "vacation", "holiday", "short-term"],
    },
];
