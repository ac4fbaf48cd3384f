//! Static content catalog
//!
//! Read-only reference data for every page: office spaces, pricing plans,
//! company content, contact details and FAQs. Nothing here is created or
//! mutated at runtime.

/// Brand name shown in headers, titles and the footer
pub const SITE_NAME: &str = "Keystone HQ";

/// Bookable office space listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeSpace {
    pub id: &'static str,
    pub title: &'static str,
    /// Short description for cards and the booking picker
    pub description: &'static str,
    /// Long description for the office spaces page
    pub detailed_description: &'static str,
    pub price: &'static str,
    pub capacity: &'static str,
    pub features: &'static [&'static str],
    pub amenities: &'static [&'static str],
    pub image: &'static str,
    /// Tailwind gradient stops, e.g. `from-yellow-400 to-orange-500`
    pub gradient: &'static str,
}

impl OfficeSpace {
    /// Headline features shown on compact cards
    pub fn key_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(3)]
    }
}

pub const OFFICE_SPACES: &[OfficeSpace] = &[
    OfficeSpace {
        id: "private-office",
        title: "Private Office Suite",
        description: "An enclosed, lockable space designed for focus and confidentiality. Perfect for teams and individuals needing privacy.",
        detailed_description: "Our Private Office Suites offer the ultimate in privacy and productivity. Each suite comes fully furnished with ergonomic furniture, high-speed internet, and climate control. The soundproof walls ensure your confidential meetings and calls remain private. Perfect for established businesses, legal consultations, or any work requiring complete focus.",
        price: "£40/hour",
        capacity: "1-4 people",
        features: &[
            "Private & Secure",
            "High-speed WiFi",
            "24/7 Access",
            "Soundproof",
            "Climate Control",
        ],
        amenities: &["Ergonomic Furniture", "Whiteboard", "Phone Booth", "Storage Space"],
        image: "https://static.wixstatic.com/media/41c79f_78ece90649ad47f2b68324da72f03cee~mv2.png?originWidth=768&originHeight=576",
        gradient: "from-yellow-400 to-orange-500",
    },
    OfficeSpace {
        id: "meeting-room",
        title: "Dynamic Meeting Room",
        description: "A professional environment equipped with presentation tools, ideal for client meetings and team workshops.",
        detailed_description: "Our Dynamic Meeting Rooms are designed to impress clients and inspire teams. Equipped with state-of-the-art presentation technology including 4K displays, wireless screen sharing, and professional audio systems. The flexible seating arrangements can accommodate various meeting styles from formal presentations to collaborative workshops.",
        price: "£60/hour",
        capacity: "4-12 people",
        features: &[
            "Conference Tech",
            "Whiteboard",
            "Catering Options",
            "4K Display",
            "Audio System",
        ],
        amenities: &[
            "Flexible Seating",
            "Video Conferencing",
            "Flip Charts",
            "Natural Light",
        ],
        image: "https://static.wixstatic.com/media/41c79f_7ba57ba6698c40a68be33afbbaa8d382~mv2.png?originWidth=768&originHeight=576",
        gradient: "from-green-400 to-blue-500",
    },
    OfficeSpace {
        id: "coworking-space",
        title: "Collaborative Coworking",
        description: "An open-plan, flexible workspace designed to foster networking and creative collaboration among professionals.",
        detailed_description: "Join our vibrant coworking community where innovation meets collaboration. Our open-plan workspace features hot desks, comfortable lounge areas, and dedicated quiet zones. Regular networking events and workshops provide opportunities to connect with like-minded professionals and grow your business network.",
        price: "£25/hour",
        capacity: "1-20 people",
        features: &[
            "Open Desk Seating",
            "Networking Events",
            "Community Access",
            "Flexible Hours",
            "Hot Desks",
        ],
        amenities: &["Lounge Areas", "Kitchen Access", "Printing Services", "Event Space"],
        image: "https://static.wixstatic.com/media/41c79f_0a1059960ad5475cb503352302e16a10~mv2.png?originWidth=768&originHeight=576",
        gradient: "from-purple-400 to-pink-500",
    },
];

/// Look up a space by identifier
pub fn find_space<'a>(catalog: &'a [OfficeSpace], id: &str) -> Option<&'a OfficeSpace> {
    catalog.iter().find(|space| space.id == id)
}

/// Primary navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Pages reachable from the site header, in display order
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Spaces", href: "/office-spaces" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Contact", href: "/contact" },
];

pub const BOOKING_PATH: &str = "/booking";

/// Gradient card explaining why to choose the business
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCard {
    pub title: &'static str,
    /// Copy used on the home page
    pub summary: &'static str,
    /// Longer copy used on the about page
    pub description: &'static str,
    pub gradient: &'static str,
    pub icon: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "Design & Architecture",
        summary: "Located in the heart of the business district with easy access to transportation and amenities.",
        description: "Located in the heart of the business district with easy access to transportation and amenities. Our spaces are designed with modern professionals in mind.",
        gradient: "from-primary to-secondary",
        icon: "building",
    },
    AboutCard {
        title: "Our Vision for Business",
        summary: "State-of-the-art facilities including high-speed internet, modern furniture, and premium coffee to fuel your success.",
        description: "State-of-the-art facilities including high-speed internet, modern furniture, and premium coffee to fuel your success and productivity.",
        gradient: "from-accent-purple to-accent-orange",
        icon: "star",
    },
    AboutCard {
        title: "Masterful Flexibility",
        summary: "Book by the hour, day, or month. We provide the ultimate flexibility to scale with your business needs.",
        description: "Book by the hour, day, or month. We provide the ultimate flexibility to scale with your business needs and changing requirements.",
        gradient: "from-secondary to-primary",
        icon: "calendar",
    },
];

/// Monthly membership plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub gradient: &'static str,
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Standard Membership",
        price: "£250",
        description: "Access to all shared amenities and a set number of private office hours.",
        features: &["High-speed Internet", "Breakout room access", "Community events"],
        gradient: "from-primary/80 to-secondary/80",
    },
    PricingPlan {
        title: "Workspace Plus",
        price: "£450",
        description: "Designated desk, parking spot, and extended access to private offices.",
        features: &["Everything in Standard", "Designated Desk", "Free Parking"],
        gradient: "from-accent-purple/80 to-accent-orange/80",
    },
    PricingPlan {
        title: "Premium Partnership",
        price: "£800",
        description: "Full access to networking opportunities, mentorship, and all premium services.",
        features: &[
            "Everything in Plus",
            "Exclusive Networking",
            "Mentorship Programs",
        ],
        gradient: "from-secondary/80 to-primary/80",
    },
];

/// Step card in the "Simple Booking Process" section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
    pub icon: &'static str,
}

pub const BOOKING_PROCESS: &[ProcessStep] = &[
    ProcessStep {
        title: "1. Select Your Space & Date",
        description: "Browse our spaces and pick the one that fits your needs. Choose a date that works for you.",
        gradient: "from-secondary to-primary",
        icon: "calendar",
    },
    ProcessStep {
        title: "2. Choose Time & Confirm",
        description: "Select your desired time slot, review your booking details, and confirm. It's that easy!",
        gradient: "from-accent-purple to-accent-orange",
        icon: "clock",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Johnson",
        role: "Founder & CEO",
        image: "https://static.wixstatic.com/media/41c79f_e37039d80c164e93b4f19a1af4aa0aa4~mv2.png?originWidth=384&originHeight=384",
        description: "With 15 years in commercial real estate, Sarah founded our company to revolutionize flexible workspace solutions.",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Head of Operations",
        image: "https://static.wixstatic.com/media/41c79f_b780d0b1e70740e7b9e7114c5d116e09~mv2.png?originWidth=384&originHeight=384",
        description: "Michael ensures every space meets our high standards for comfort, technology, and professional atmosphere.",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Community Manager",
        image: "https://static.wixstatic.com/media/41c79f_a8b10eeeb9c44eaeb42e4545f7ca6b4f~mv2.png?originWidth=384&originHeight=384",
        description: "Emily creates networking opportunities and fosters the collaborative spirit that makes our community thrive.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Happy Clients" },
    Stat { number: "50+", label: "Office Spaces" },
    Stat { number: "24/7", label: "Access Available" },
    Stat { number: "99%", label: "Satisfaction Rate" },
];

/// Icon + title + description triple, used for values and amenities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COMPANY_VALUES: &[Highlight] = &[
    Highlight {
        icon: "award",
        title: "Excellence",
        description: "We maintain the highest standards in every aspect of our service, from space design to customer support.",
    },
    Highlight {
        icon: "target",
        title: "Innovation",
        description: "We continuously evolve our offerings to meet the changing needs of modern professionals and businesses.",
    },
    Highlight {
        icon: "heart",
        title: "Community",
        description: "We foster connections and collaboration, creating an environment where relationships and ideas flourish.",
    },
];

/// Amenities every space includes
pub const COMMON_AMENITIES: &[Highlight] = &[
    Highlight {
        icon: "wifi",
        title: "High-Speed WiFi",
        description: "Reliable internet connection",
    },
    Highlight {
        icon: "coffee",
        title: "Premium Coffee",
        description: "Complimentary beverages",
    },
    Highlight {
        icon: "car",
        title: "Parking Available",
        description: "Convenient parking spots",
    },
    Highlight {
        icon: "shield",
        title: "24/7 Security",
        description: "Safe and secure environment",
    },
];

pub const STORY_PARAGRAPHS: &[&str] = &[
    "Founded in 2018, our company emerged from a simple observation: traditional office leasing wasn't meeting the needs of modern businesses. Entrepreneurs, freelancers, and growing companies needed flexibility, not long-term commitments.",
    "We started with a single location and a vision to create spaces that inspire productivity and foster community. Today, we're proud to serve hundreds of professionals across multiple locations, each designed with the same attention to detail and commitment to excellence.",
    "Our journey continues as we expand our offerings and refine our spaces based on the evolving needs of our community. Every decision we make is guided by our core values: flexibility, quality, and genuine care for our members' success.",
];

/// Contact channel card on the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub gradient: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "map-pin",
        title: "Visit Us",
        details: &["123 Business District", "City Center, State 12345"],
        gradient: "from-primary to-secondary",
    },
    ContactChannel {
        icon: "clock",
        title: "Business Hours",
        details: &[
            "Monday - Friday: 8:00 AM - 8:00 PM",
            "Saturday: 9:00 AM - 5:00 PM",
            "Sunday: Closed",
        ],
        gradient: "from-accent-purple to-accent-orange",
    },
    ContactChannel {
        icon: "phone",
        title: "Call Us",
        details: &["Main: (555) 123-4567", "Bookings: (555) 123-4568"],
        gradient: "from-secondary to-primary",
    },
    ContactChannel {
        icon: "mail",
        title: "Email Us",
        details: &["info@officespace.com", "bookings@officespace.com"],
        gradient: "from-green-400 to-blue-500",
    },
];

pub const ADDRESS: &str = "123 Business District, City Center";
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "info@officespace.com";

/// Opening hours as (days, hours) rows
pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "8:00 AM - 8:00 PM"),
    ("Saturday", "9:00 AM - 5:00 PM"),
    ("Sunday", "Closed"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How far in advance can I book a space?",
        answer: "You can book spaces up to 3 months in advance. For longer-term arrangements, please contact us directly.",
    },
    Faq {
        question: "What is your cancellation policy?",
        answer: "Free cancellation up to 24 hours before your booking. Cancellations within 24 hours are subject to a 50% charge.",
    },
    Faq {
        question: "Do you offer monthly memberships?",
        answer: "Yes! We offer flexible monthly memberships with various tiers to suit different needs and budgets.",
    },
    Faq {
        question: "Is parking available?",
        answer: "Yes, we provide complimentary parking for all our members and hourly guests.",
    },
];

/// Footer link columns as (heading, items)
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    (
        "Services",
        &["Private Offices", "Meeting Rooms", "Coworking Spaces", "Virtual Offices"],
    ),
    (
        "Amenities",
        &["High-Speed WiFi", "Premium Coffee", "Parking Available", "24/7 Security"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_space_ids_are_unique() {
        let ids: HashSet<_> = OFFICE_SPACES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), OFFICE_SPACES.len());
    }

    #[test]
    fn test_find_space() {
        let space = find_space(OFFICE_SPACES, "meeting-room").unwrap();
        assert_eq!(space.title, "Dynamic Meeting Room");
        assert!(find_space(OFFICE_SPACES, "rooftop").is_none());
    }

    #[test]
    fn test_prices_use_one_currency() {
        for space in OFFICE_SPACES {
            assert!(space.price.starts_with('£'), "{} has {}", space.id, space.price);
        }
        for plan in PRICING_PLANS {
            assert!(plan.price.starts_with('£'), "{} has {}", plan.title, plan.price);
        }
    }

    #[test]
    fn test_key_features_capped_at_three() {
        for space in OFFICE_SPACES {
            let key = space.key_features();
            assert_eq!(key.len(), 3);
            assert_eq!(key, &space.features[..3]);
        }
    }

    #[test]
    fn test_nav_links_are_absolute_paths() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('/'));
        }
        assert_eq!(NAV_LINKS[0].href, "/");
    }
}
