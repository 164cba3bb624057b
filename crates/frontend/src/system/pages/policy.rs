use leptos::prelude::*;

use crate::shared::components::ui::Button;

/// Which legal document the page renders; both share one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Terms,
    Privacy,
}

struct PolicySection {
    title: &'static str,
    body: &'static [&'static str],
}

const TERMS_SECTIONS: [PolicySection; 6] = [
    PolicySection {
        title: "1. Introduction",
        body: &[
            "By accessing or using our services, you agree to comply with these Terms & Conditions. If you do not agree, please do not use our website or services.",
        ],
    },
    PolicySection {
        title: "2. Use of Services",
        body: &[
            "You agree to use the website only for lawful purposes and in a manner that does not infringe the rights of, or restrict the use of, other customers.",
            "Orders placed through the storefront are offers to purchase; we reserve the right to decline or limit quantities at our discretion.",
        ],
    },
    PolicySection {
        title: "3. Pricing & Payment",
        body: &[
            "All prices are displayed in store currency and include VAT where applicable. Delivery fees are shown at checkout before you confirm an order.",
        ],
    },
    PolicySection {
        title: "4. Delivery & Returns",
        body: &[
            "Standard delivery takes 2-5 business days with tracking. Returns are accepted within 30 days for unused items in their original packaging.",
        ],
    },
    PolicySection {
        title: "5. Custom Covers",
        body: &[
            "Custom-measured covers are produced to your specifications and can only be returned when faulty. Measurements submitted through a special request form are used solely to prepare your quote.",
        ],
    },
    PolicySection {
        title: "6. Changes to These Terms",
        body: &[
            "We may update these terms from time to time. Continued use of the website after changes are published constitutes acceptance of the revised terms.",
        ],
    },
];

const PRIVACY_SECTIONS: [PolicySection; 6] = [
    PolicySection {
        title: "1. Introduction",
        body: &[
            "We are committed to protecting your personal information and maintaining transparency about how we use it. This Privacy Policy applies to all users of our website and services.",
        ],
    },
    PolicySection {
        title: "2. Information We Collect",
        body: &[
            "Information you provide directly (name, email, phone, address).",
            "Account information, preferences, and settings.",
            "Payment and transaction information.",
            "Automatically collected information such as IP address, browser type, device information, and usage data.",
        ],
    },
    PolicySection {
        title: "3. How We Use Your Information",
        body: &[
            "We use collected information to process orders, provide customer support, improve our products, and send service communications you have opted into.",
        ],
    },
    PolicySection {
        title: "4. Sharing & Disclosure",
        body: &[
            "We do not sell your personal information. Data is shared only with delivery partners and payment processors as needed to fulfil your order, or when required by law.",
        ],
    },
    PolicySection {
        title: "5. Data Security & Retention",
        body: &[
            "Reasonable technical and organisational measures protect your data. We retain personal information only as long as necessary for the purposes described here.",
        ],
    },
    PolicySection {
        title: "6. Your Rights",
        body: &[
            "You may request access to, correction of, or deletion of your personal information at any time by contacting our support team.",
        ],
    },
];

#[component]
pub fn PolicyPage(kind: PolicyKind) -> impl IntoView {
    let (title, lead, sections): (&'static str, &'static str, &'static [PolicySection]) =
        match kind {
        PolicyKind::Privacy => (
            "Privacy Policy",
            "Your privacy is important to us. This policy explains how we collect, use, and protect your information when you use our services.",
            &PRIVACY_SECTIONS,
        ),
        PolicyKind::Terms => (
            "Terms & Conditions",
            "Please read these terms and conditions carefully before using our website or services. They govern your access and use of our platform.",
            &TERMS_SECTIONS,
        ),
    };

    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <main class="policy">
            <section class="policy__inner">
                <div class="policy__header">
                    <h1 class="policy__title">{title}</h1>
                    <p class="policy__lead">{lead}</p>
                </div>

                <div class="policy__sections">
                    {sections
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="policy__section">
                                    <h2 class="policy__section-title">{section.title}</h2>
                                    {section
                                        .body
                                        .iter()
                                        .map(|paragraph| {
                                            view! { <p class="policy__paragraph">{*paragraph}</p> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="policy__footer">
                    <Button variant="ghost" on_click=Callback::new(go_back)>
                        "\u{2190} Go Back"
                    </Button>
                </div>
            </section>
        </main>
    }
}
