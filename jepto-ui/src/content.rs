//! Site Content
//!
//! Immutable literal data rendered by the landing sections.

/// Company name as shown in the navbar and footer
pub const COMPANY_NAME: &str = "Jepto";
pub const COMPANY_SUFFIX: &str = "Enterprises Ltd.";
pub const COMPANY_FULL_NAME: &str = "Jepto Enterprises";

pub const LOGO_URL: &str = "https://jeptoent.com.ng/img/logo.jpeg";

pub const PHONE_DISPLAY: &str = "+234-802-829-8683";
pub const PHONE_URI: &str = "tel:+2348028298683";
pub const EMAIL: &str = "info@jeptoent.com.ng";
pub const EMAIL_URI: &str = "mailto:info@jeptoent.com.ng";
pub const WHATSAPP_URL: &str = "https://wa.me/+2348028298683";
pub const WHATSAPP_ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/jepto_ent/";
pub const ADDRESS: &str = "Off Funtaj Int'l School Road, Lifecamp, FCT, Abuja.";

pub const DEVELOPER_NAME: &str = "GlobalTech Computers";
pub const DEVELOPER_URL: &str = "http://www.gtc.com.ng";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1613490493576-7fde63acd811?q=80&w=2071&auto=format&fit=crop";
pub const ABOUT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053&auto=format&fit=crop";

/// An entry in the navbar (desktop and mobile menus share this list)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Opens in a new browsing context and is never intercepted
    pub external: bool,
}

impl NavLink {
    const fn anchor(name: &'static str, href: &'static str) -> Self {
        Self { name, href, external: false }
    }

    const fn external(name: &'static str, href: &'static str) -> Self {
        Self { name, href, external: true }
    }

    /// Value for the anchor's `target` attribute
    pub fn target(&self) -> &'static str {
        if self.external {
            "_blank"
        } else {
            "_self"
        }
    }
}

/// Navigation entries in render order
pub const NAV_LINKS: &[NavLink] = &[
    NavLink::anchor("About", "#about"),
    NavLink::anchor("Services", "#services"),
    NavLink::anchor("Projects", "#portfolio"),
    NavLink::anchor("Testimonials", "#testimonials"),
    NavLink::anchor("Contact", "#contact"),
    NavLink::external("Blog", "https://blog.jeptoent.com.ng/"),
];

/// A "why choose us" bullet in the about section
#[derive(Debug, Clone, Copy)]
pub struct Reason {
    pub title: &'static str,
    pub text: &'static str,
}

pub const REASONS: &[Reason] = &[
    Reason {
        title: "Expertise & Experience",
        text: "Professional guidance in Abuja real estate.",
    },
    Reason {
        title: "Verified & Secure",
        text: "Thorough background checks on all properties.",
    },
    Reason {
        title: "Comprehensive Services",
        text: "Personalized consultation and ongoing support.",
    },
    Reason {
        title: "Affordable Pricing",
        text: "Cost-effective solutions tailored to you.",
    },
];

/// A numbered service card
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Real Estate Services",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=1000&auto=format&fit=crop",
        image_alt: "Real Estate",
        description: "Discover the perfect property with our expert solutions. Whether you\u{2019}re buying, selling, or seeking investment advice, we provide comprehensive support.",
        tagline: "Consultation & Sales",
    },
    Service {
        title: "Developers",
        image: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?q=80&w=1000&auto=format&fit=crop",
        image_alt: "Developers",
        description: "Transform properties and land into thriving spaces. We specialize in land and property development, renovating old houses, and completing unfinished projects.",
        tagline: "Construction & Renovation",
    },
    Service {
        title: "Property Management",
        image: "https://images.unsplash.com/photo-1554469384-e58fac16e23a?q=80&w=1000&auto=format&fit=crop",
        image_alt: "Property Management",
        description: "Managing assets with care and professionalism. We take the headache out of property ownership with reliable and efficient management services.",
        tagline: "Asset Care",
    },
    Service {
        title: "General Contracts",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=1000&auto=format&fit=crop",
        image_alt: "General Contracts",
        description: "Count on us for reliable supply and service solutions. From providing quality products to handling general contracts and merchandise.",
        tagline: "Merchandise & Supply",
    },
];

/// A gallery tile in the portfolio section
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project { title: "Luxury Villa", image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=600" },
    Project { title: "Modern Apartments", image: "https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=600" },
    Project { title: "Commercial Hub", image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=600" },
    Project { title: "Urban Estate", image: "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?q=80&w=600" },
    Project { title: "Renovation Project", image: "https://images.unsplash.com/photo-1605146769289-440113cc3d00?q=80&w=600" },
    Project { title: "Interior Design", image: "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=600" },
    Project { title: "Kitchen Remodel", image: "https://images.unsplash.com/photo-1600585152220-90363fe7e115?q=80&w=600" },
    Project { title: "Duplex Build", image: "https://images.unsplash.com/photo-1600573472592-401b489a3cdc?q=80&w=600" },
    Project { title: "Family Home", image: "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?q=80&w=600" },
];

/// A client testimonial card
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub quote: &'static str,
}

/// Every testimonial is rendered with this many stars
pub const TESTIMONIAL_STARS: usize = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Chijioke A.",
        role: "Homebuyer",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=200",
        quote: "I couldn't have asked for a better experience with Jepto. Their team expertly guided me through every step of buying my first home.",
    },
    Testimonial {
        name: "Amina M.",
        role: "Property Investor",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=200",
        quote: "As an investor, Jepto truly stands out. They provided expert advice and delivered great returns on my investments.",
    },
    Testimonial {
        name: "Tunde D.",
        role: "Developer",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=200",
        quote: "Working with Jepto on our recent property development project was a game changer. Exceptional attention to detail.",
    },
    Testimonial {
        name: "Adebimpe R.",
        role: "Property Owner",
        avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=200",
        quote: "Managing multiple properties can be a headache, but Jepto has taken that burden off my shoulders. Safe hands.",
    },
    Testimonial {
        name: "Tolu A.",
        role: "Property Owner",
        avatar: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=200",
        quote: "I\u{2019}ve been working with Jepto for years. From leasing to maintenance, they provide exceptional service.",
    },
    Testimonial {
        name: "Seyi O.",
        role: "Real Estate Investor",
        avatar: "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?q=80&w=200",
        quote: "Jepto\u{2019}s investment strategies have been a game-changer. I trust them with my real estate investments every time.",
    },
];

/// Icon shown on a social button in the contact panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Instagram,
    Mail,
    WhatsApp,
    Phone,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
    pub new_tab: bool,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { kind: SocialKind::Instagram, href: INSTAGRAM_URL, new_tab: true },
    SocialLink { kind: SocialKind::Mail, href: EMAIL_URI, new_tab: false },
    SocialLink { kind: SocialKind::WhatsApp, href: WHATSAPP_URL, new_tab: true },
    SocialLink { kind: SocialKind::Phone, href: PHONE_URI, new_tab: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_order_and_kinds() {
        let names: Vec<_> = NAV_LINKS.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            ["About", "Services", "Projects", "Testimonials", "Contact", "Blog"]
        );

        for link in NAV_LINKS {
            assert_eq!(link.external, link.href.starts_with("http"), "{}", link.name);
        }
        assert_eq!(NAV_LINKS[5].target(), "_blank");
        assert_eq!(NAV_LINKS[0].target(), "_self");
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(REASONS.len(), 4);
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PROJECTS.len(), 9);
        assert_eq!(TESTIMONIALS.len(), 6);
        assert_eq!(SOCIAL_LINKS.len(), 4);
    }

    #[test]
    fn test_only_web_social_links_open_new_tab() {
        for link in SOCIAL_LINKS {
            assert_eq!(link.new_tab, link.href.starts_with("https://"), "{:?}", link.kind);
        }
    }
}
