// Copy shown on the landing page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    /// `id` of the landing section the link scrolls to.
    pub section: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        section_href(self.section)
    }
}

pub fn section_href(section: &str) -> String {
    format!("#{}", section)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Treatment {
    pub title: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Differentiator {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OfficeHours {
    pub day: &'static str,
    pub time: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Credential {
    pub heading: &'static str,
    pub detail: &'static str,
}

pub const PRACTICE_NAME: &str = "AOK Health Solutions";
pub const PHONE_DISPLAY: &str = "(973) 447-1479";
pub const PHONE_HREF: &str = "tel:19734471479";
pub const EMAIL: &str = "aokhealthsolutions@gmail.com";
pub const BOOKING_URL: &str = "https://www.tebra.com/care/provider/akosua-karikari-np-1447632765";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d377.27765859156414!2d-74.22649050461714!3d40.93189809843089!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c30273d1c43f37%3A0x5d109c5cc40e2476!2s586%20Valley%20Rd%2C%20Wayne%2C%20NJ%2007470%2C%20USA!5e0!3m2!1sen!2s!4v1729361234567!5m2!1sen!2s";
pub const MAP_TITLE: &str = "Office Location - 586 Valley Rd, Wayne, NJ 07470";

// Section ids rendered by the landing page.
pub const HOME_SECTION: &str = "home";
pub const TREATMENTS_SECTION: &str = "treatments";
pub const APPROACH_SECTION: &str = "approach";
pub const INSURANCE_SECTION: &str = "insurance";
pub const FAQ_SECTION: &str = "faq";
pub const PROVIDER_SECTION: &str = "provider";
pub const CONTACT_SECTION: &str = "contact";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Treatments", section: TREATMENTS_SECTION },
    NavLink { label: "Provider", section: PROVIDER_SECTION },
    NavLink { label: "Insurance", section: INSURANCE_SECTION },
    NavLink { label: "FAQ", section: FAQ_SECTION },
    NavLink { label: "Contact", section: CONTACT_SECTION },
];

pub const HERO_IMAGES: &[&str] = &["/yo.png", "/AdobeStock_629850806.webp", "/HERO2.png"];

pub const TRUST_BADGES: &[&str] = &[
    "Board-Certified PMHNP",
    "Verified by Psychology Today",
    "Licensed in NY & NJ",
];

pub const TREATMENTS: &[Treatment] = &[
    Treatment { title: "Anxiety Disorder", image: "/ANXIETY.png" },
    Treatment { title: "ADHD", image: "/ADHD.png" },
    Treatment { title: "Bipolar Disorder", image: "/BIPOLAR.png" },
    Treatment { title: "Depression", image: "/DEPRESSION.png" },
    Treatment { title: "Medication Management", image: "/MEDICATION.png" },
    Treatment { title: "Mood Disorder", image: "/MOOD.png" },
    Treatment { title: "OCD", image: "/OCD.png" },
    Treatment { title: "PTSD", image: "/PTSD.png" },
];

pub const DIFFERENTIATORS: &[Differentiator] = &[
    Differentiator {
        icon: "🌱",
        title: "Personalized treatment roadmaps",
        description: "Each visit is collaborative and designed to honor your story, cultural identity, and immediate goals.",
    },
    Differentiator {
        icon: "🧘",
        title: "Holistic, whole-person focus",
        description: "Medication management is paired with lifestyle strategies, therapy coordination, and ongoing encouragement.",
    },
    Differentiator {
        icon: "⏰",
        title: "Flexible access to care",
        description: "Virtual and in-person options with evening and weekend availability ensure care fits your routine.",
    },
];

pub const INSURANCES: &[&str] = &[
    "Medicare",
    "Medicaid",
    "Cigna",
    "Optum",
    "Oscar",
    "United Healthcare",
    "Horizon BCBS",
    "BCBS New Jersey",
    "Fidelis Care",
    "WellCare",
    "AmeriHealth",
    "Tricare",
    "Aetna",
    "Multiplan",
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do you offer virtual visits?",
        answer: "Yes. Secure telepsychiatry appointments are available for patients located in New Jersey and New York.",
    },
    Faq {
        question: "What can I expect during my first appointment?",
        answer: "Your initial visit focuses on understanding your history, current concerns, and goals so we can create a tailored care plan.",
    },
    Faq {
        question: "What should I bring to my first visit?",
        answer: "Please have a full medication list, prior treatment summaries if available, and any questions you would like to cover.",
    },
    Faq {
        question: "How soon can I be seen?",
        answer: "We strive to offer timely availability with evening and weekend appointments to fit your schedule.",
    },
];

pub const OFFICE_HOURS: &[OfficeHours] = &[
    OfficeHours { day: "Monday – Thursday", time: "4:00 PM – 8:00 PM" },
    OfficeHours { day: "Friday", time: "Closed" },
    OfficeHours { day: "Saturday", time: "Closed" },
    OfficeHours { day: "Sunday", time: "12:00 PM – 4:00 PM" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Akosua made me feel heard from the very first session. We developed a treatment plan that finally feels sustainable.",
        name: "M.M.",
        role: "Patient, Jersey City",
    },
    Testimonial {
        quote: "She worked closely with my therapist to ensure my medications and coping skills lined up. I feel balanced again.",
        name: "R.M.",
        role: "Patient, Brooklyn",
    },
];

pub const PROVIDER_CREDENTIALS: &[Credential] = &[
    Credential {
        heading: "Board Certification",
        detail: "Psychiatric Mental Health Nurse Practitioner (PMHNP-C)",
    },
    Credential {
        heading: "Licenses",
        detail: "NY: F406380-01 (2024) · NJ: 26NJ00576200 (2024)",
    },
    Credential {
        heading: "Treatment Modalities",
        detail: "Cognitive Behavioral Therapy (CBT), Motivational Interviewing, Medication Management",
    },
    Credential {
        heading: "Communities Served",
        detail: "LGBTQ+, BIPOC, First Responders, HIV/AIDS, Sex Workers, Racial Justice Allies",
    },
    Credential {
        heading: "Ages Served",
        detail: "Children (6–10), Preteens, Teens, Adults, Elders (65+)",
    },
    Credential {
        heading: "Languages",
        detail: "English, Twi",
    },
];

pub const VISIT_REMINDERS: &[&str] = &[
    "Have your current medication list ready for each appointment.",
    "Telehealth visits work best from a private space with reliable internet.",
    "Call 911 or go to the nearest emergency room for urgent safety concerns.",
];

/// Two-digit card number shown on each treatment card.
pub fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hrefs_are_anchors_to_their_section() {
        assert_eq!(NAV_LINKS[0].href(), "#treatments");
        for link in NAV_LINKS {
            assert_eq!(link.href().strip_prefix('#'), Some(link.section));
        }
    }

    #[test]
    fn nav_sections_are_unique() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            assert!(NAV_LINKS[i + 1..].iter().all(|other| other.section != link.section));
        }
    }

    #[test]
    fn faq_questions_are_unique_keys() {
        for (i, faq) in FAQS.iter().enumerate() {
            assert!(FAQS[i + 1..].iter().all(|other| other.question != faq.question));
        }
    }

    #[test]
    fn card_numbers_are_zero_padded() {
        assert_eq!(card_number(0), "01");
        assert_eq!(card_number(7), "08");
        assert_eq!(card_number(11), "12");
    }
}
