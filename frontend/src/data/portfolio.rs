/// A delivered client project shown in the portfolio.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub hook: &'static str,
    pub category: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        slug: "going-nepal-adventure",
        title: "Going Nepal Adventure",
        description: "Adventure-focused travel brand offering trekking, tours, and outdoor experiences across Nepal, Bhutan, and Tibet with a modern, story-driven web experience.",
        image: "/projects/gna.png",
        image_alt: "Trekkers walking along a mountain ridge in the Himalayas at sunrise",
        tags: &["Travel Website", "Next.js", "Tailwind CSS", "Conversion-Focused UI"],
        live_url: "https://goingnepaladventure.com/",
        hook: "Adventure travel, made simple.",
        category: "Travel & Adventure",
    },
    Project {
        id: 2,
        slug: "nepal-luxury-escapes",
        title: "Nepal Luxury Escapes",
        description: "High-end luxury travel platform curating bespoke journeys across Nepal, Bhutan, and Tibet, with an emphasis on premium design and clear trip planning flows.",
        image: "/projects/lux.png",
        image_alt: "Luxury infinity pool overlooking misty Himalayan hills at golden hour",
        tags: &["Luxury Brand", "Next.js", "Tailwind CSS", "UX Strategy"],
        live_url: "https://nepalluxuryescapes.com/",
        hook: "Bespoke luxury journeys across the Himalayas.",
        category: "Luxury Travel",
    },
    Project {
        id: 3,
        slug: "casemandu",
        title: "Casemandu",
        description: "E-commerce experience for lifestyle and tech accessories, designed for fast product discovery, clean presentation, and smooth checkout journeys.",
        image: "/projects/casemandu.png",
        image_alt: "Minimal product layout with colorful phone cases on a clean background",
        tags: &["E-commerce", "Modern UI", "Responsive Design", "Performance"],
        live_url: "https://www.casemandu.com.np/",
        hook: "Modern commerce for everyday carry essentials.",
        category: "E-commerce",
    },
    Project {
        id: 4,
        slug: "khandbari-rudraksha",
        title: "Khandbari Rudraksha & Suppliers",
        description: "Spiritual commerce platform for authentic Rudraksha beads and malas, combining trust-building content, storytelling, and a clean product browsing experience.",
        image: "/projects/khandbari.png",
        image_alt: "Close-up of Rudraksha beads and a mala resting on a wooden surface",
        tags: &["E-commerce", "Brand Storytelling", "Conversion Design", "SEO"],
        live_url: "https://www.khandbarirudraksha.com/",
        hook: "Authentic Rudraksha, presented with trust and clarity.",
        category: "Spiritual & Retail",
    },
    Project {
        id: 5,
        slug: "vajra-foundation-nepal",
        title: "Vajra Foundation Nepal",
        description: "Impact-driven NGO website focused on education, health, and environment initiatives, designed to highlight stories, transparency, and donation journeys.",
        image: "/projects/vajra.png",
        image_alt: "Children in a classroom in rural Nepal raising their hands and smiling",
        tags: &["NGO Website", "Storytelling", "Donor Experience", "Accessibility"],
        live_url: "https://vajrafoundationnepal.org/",
        hook: "Design that puts impact, stories, and trust first.",
        category: "Non-profit",
    },
];

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// The project after `id`, wrapping around to the first one.
pub fn next_project(id: u32) -> Option<&'static Project> {
    let idx = PROJECTS.iter().position(|p| p.id == id)?;
    PROJECTS.get((idx + 1) % PROJECTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_project(3).map(|p| p.slug), Some("casemandu"));
        assert!(find_project(0).is_none());
        assert!(find_project(99).is_none());
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(next_project(1).map(|p| p.id), Some(2));
        let last = PROJECTS[PROJECTS.len() - 1].id;
        assert_eq!(next_project(last).map(|p| p.id), Some(PROJECTS[0].id));
        assert!(next_project(42).is_none());
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
