use yew::prelude::*;
use crate::components::legal_document::{LegalDocument, LegalSection};

const LAST_UPDATED: &str = "October 1, 2026";

const TERMS_SECTIONS: &[LegalSection] = &[
    LegalSection {
        id: "acceptance",
        title: "Acceptance of Terms",
        paragraphs: &[
            "By accessing or using the service you agree to be bound by these Terms & Conditions. If you do not agree, do not use the service.",
            "We may update these terms from time to time. Continued use after an update means you accept the revised terms.",
        ],
    },
    LegalSection {
        id: "accounts",
        title: "Accounts",
        paragraphs: &[
            "You are responsible for keeping your login credentials confidential and for all activity that happens under your account.",
            "Accounts are personal. Do not share them or create accounts on behalf of others without their permission.",
        ],
    },
    LegalSection {
        id: "acceptable-use",
        title: "Acceptable Use",
        paragraphs: &[
            "Do not use the service to break the law, harass others, send spam, or interfere with the operation of the service.",
            "We may suspend accounts that violate these rules, with or without notice.",
        ],
    },
    LegalSection {
        id: "payments",
        title: "Payments",
        paragraphs: &[
            "Paid plans are billed in advance. Prices are shown before checkout and include applicable taxes unless stated otherwise.",
            "Due to the nature of the service we do not offer refunds for periods already started.",
        ],
    },
    LegalSection {
        id: "liability",
        title: "Limitation of Liability",
        paragraphs: &[
            "The service is provided as-is. To the maximum extent permitted by law we are not liable for indirect, incidental or consequential damages.",
        ],
    },
    LegalSection {
        id: "termination",
        title: "Termination",
        paragraphs: &[
            "You may stop using the service at any time. We may terminate or suspend access if you breach these terms.",
        ],
    },
    LegalSection {
        id: "contact",
        title: "Contact",
        paragraphs: &[
            "Questions about these terms can be sent to support@example.com.",
        ],
    },
];

const PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        id: "overview",
        title: "Overview",
        paragraphs: &[
            "This policy explains what information we collect, why we collect it and what choices you have.",
        ],
    },
    LegalSection {
        id: "data-collected",
        title: "Information We Collect",
        paragraphs: &[
            "Account information you give us, such as your email address.",
            "Basic technical information needed to run the service, such as error reports. We do not use tracking cookies.",
        ],
    },
    LegalSection {
        id: "data-use",
        title: "How We Use Information",
        paragraphs: &[
            "We use your information only to provide and improve the service, to contact you about your account and to meet legal obligations.",
            "We never sell your personal information.",
        ],
    },
    LegalSection {
        id: "data-sharing",
        title: "Sharing",
        paragraphs: &[
            "We share data only with processors that help us run the service, such as payment providers, and only as far as needed for that purpose.",
        ],
    },
    LegalSection {
        id: "retention",
        title: "Data Retention",
        paragraphs: &[
            "We keep account data while your account is active and delete it within 30 days after you close your account.",
        ],
    },
    LegalSection {
        id: "rights",
        title: "Your Rights",
        paragraphs: &[
            "You can request access to, correction of, or deletion of your personal data at any time.",
        ],
    },
    LegalSection {
        id: "privacy-contact",
        title: "Contact",
        paragraphs: &[
            "Privacy questions can be sent to privacy@example.com.",
        ],
    },
];

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <LegalDocument
            title="Terms & Conditions"
            last_updated={LAST_UPDATED}
            sections={TERMS_SECTIONS}
        />
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalDocument
            title="Privacy Policy"
            last_updated={LAST_UPDATED}
            sections={PRIVACY_SECTIONS}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids(sections: &[LegalSection]) {
        let ids: HashSet<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), sections.len());
    }

    #[test]
    fn section_ids_are_unique() {
        assert_unique_ids(TERMS_SECTIONS);
        assert_unique_ids(PRIVACY_SECTIONS);
    }

    #[test]
    fn documents_do_not_share_anchors() {
        let terms: HashSet<_> = TERMS_SECTIONS.iter().map(|s| s.id).collect();
        assert!(PRIVACY_SECTIONS.iter().all(|s| !terms.contains(s.id)));
    }
}
