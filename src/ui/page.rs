//! # Page Content
//!
//! The informational page: ordered sections, one of which carries the FAQ
//! accordion. [`PageLayout::build`] wraps the content to the viewport width
//! and records where each section and accordion header lands.

use crate::ui::widgets::Accordion;

#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub accordion: Vec<AccordionItem>,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: &'static str,
    pub sections: Vec<Section>,
}

impl Page {
    /// Number of accordion items across all sections.
    pub fn accordion_len(&self) -> usize {
        self.sections.iter().map(|s| s.accordion.len()).sum()
    }

    pub fn passport_guide() -> Self {
        Self {
            title: "Philippine Passport Guide",
            sections: vec![
                Section {
                    id: "overview",
                    title: "Overview",
                    paragraphs: vec![
                        "Everything you need to know before applying for or renewing a Philippine ePassport.",
                        "Use the menu to jump between sections, or open the chat assistant and ask a question in your own words.",
                    ],
                    accordion: Vec::new(),
                },
                Section {
                    id: "eligibility",
                    title: "Who Can Apply",
                    paragraphs: vec![
                        "Only a Filipino citizen is eligible to acquire a Philippine passport.",
                        "Bring the complete set of requirements appropriate to your application type: new applicants, renewals, minors and dual citizens each have their own checklist.",
                    ],
                    accordion: Vec::new(),
                },
                Section {
                    id: "appointment",
                    title: "Booking an Appointment",
                    paragraphs: vec![
                        "Appointments are set online via passport.gov.ph and are free of charge.",
                        "If no slots are available, refresh the page later. Slots open up from time to time.",
                    ],
                    accordion: Vec::new(),
                },
                Section {
                    id: "processing",
                    title: "Processing Time",
                    paragraphs: vec![
                        "NCR applicants: Regular processing takes 10 working days, Expedited takes 5 working days.",
                        "Outside NCR: Regular processing takes 12 working days, Expedited takes 7 working days.",
                    ],
                    accordion: Vec::new(),
                },
                Section {
                    id: "fees",
                    title: "Fees",
                    paragraphs: vec![
                        "Regular Processing: PHP 950.00",
                        "Expedited Processing: PHP 1,200.00",
                        "Penalty for Lost/Mutilated ePassport: PHP 350.00",
                    ],
                    accordion: Vec::new(),
                },
                Section {
                    id: "validity",
                    title: "Passport Validity",
                    paragraphs: vec![
                        "Passports issued to Filipinos 18 years or older are valid for 10 years.",
                        "For applicants under 18 at the time of application, the passport is valid for 5 years.",
                    ],
                    accordion: Vec::new(),
                },
                Section {
                    id: "faq",
                    title: "Frequently Asked Questions",
                    paragraphs: vec!["Select a question to show its answer."],
                    accordion: vec![
                        AccordionItem {
                            question: "Is the online appointment free?",
                            answer: "Yes. All appointments set through passport.gov.ph are free.",
                        },
                        AccordionItem {
                            question: "Can I apply without an appointment?",
                            answer: "No. Applicants need a confirmed appointment before going to the consular office.",
                        },
                        AccordionItem {
                            question: "How long is processing outside NCR?",
                            answer: "Regular processing takes 12 working days and Expedited takes 7 working days.",
                        },
                        AccordionItem {
                            question: "What if my passport was lost?",
                            answer: "A penalty of PHP 350.00 applies on top of the processing fee for lost or mutilated ePassports.",
                        },
                    ],
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    PageTitle,
    SectionTitle,
    Body,
    AccordionHeader { index: usize, open: bool },
    AccordionBody,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub text: String,
    pub kind: LineKind,
}

/// The page wrapped to a given width.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<PageLine>,
    /// First line of each section, in page order.
    pub section_tops: Vec<usize>,
    /// Line of each accordion header, indexed by accordion item.
    pub accordion_headers: Vec<usize>,
}

impl PageLayout {
    pub fn build(page: &Page, accordion: &Accordion, width: usize) -> Self {
        let width = width.max(10);
        let mut layout = Self::default();

        layout.push(page.title.to_uppercase(), LineKind::PageTitle);
        layout.push(String::new(), LineKind::Blank);

        let mut item_index = 0;
        for section in &page.sections {
            layout.section_tops.push(layout.lines.len());
            layout.push(section.title.to_string(), LineKind::SectionTitle);
            layout.push("─".repeat(section.title.chars().count()), LineKind::SectionTitle);

            for paragraph in &section.paragraphs {
                layout.push_wrapped(paragraph, width, "", LineKind::Body);
                layout.push(String::new(), LineKind::Blank);
            }

            for item in &section.accordion {
                let open = accordion.is_open(item_index);
                let marker = if open { "▼" } else { "▶" };
                layout.accordion_headers.push(layout.lines.len());
                layout.push(
                    format!("{} {}", marker, item.question),
                    LineKind::AccordionHeader {
                        index: item_index,
                        open,
                    },
                );
                if open {
                    layout.push_wrapped(item.answer, width, "  ", LineKind::AccordionBody);
                }
                item_index += 1;
            }
            if !section.accordion.is_empty() {
                layout.push(String::new(), LineKind::Blank);
            }
        }

        layout
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The accordion item whose header is on `line`, if any.
    pub fn accordion_at(&self, line: usize) -> Option<usize> {
        self.accordion_headers.iter().position(|&l| l == line)
    }

    fn push(&mut self, text: String, kind: LineKind) {
        self.lines.push(PageLine { text, kind });
    }

    fn push_wrapped(&mut self, text: &str, width: usize, indent: &str, kind: LineKind) {
        let options = textwrap::Options::new(width)
            .initial_indent(indent)
            .subsequent_indent(indent);
        for line in textwrap::wrap(text, options) {
            self.push(line.into_owned(), kind);
        }
    }
}
