use super::{Entry, Faq, FormCopy, FundAllocation, ModalCopy, Product, Translations};

pub static EN: Translations = Translations {
    hero_title: [
        "*Patented* Technologies",
        "Revolutionizing",
        "Sensitive Skin Care",
    ],
    hero_subtitle: "Brazilian nanotechnology with international scientific validation",
    investment_badge: "Investment Round Open",
    cta_button: "Learn About Opportunity",

    numbers_title: "Numbers That Define the Future",
    numbers_subtitle: "A consistent trajectory of growth and innovation",
    market_label: "North American Market",
    valuation_label: "Valuation",
    patents_label: "INPI Patents",
    growth_label: "3-Year Growth",
    global_market: "Global Herbal Medicine Market: $13.75 billion (CAGR 25% | 2023-2033)",

    problem_title: "The Problem",
    problem_subtitle: "A gigantic market completely underserved",
    problem_description: "Millions of Brazilians with special dermatological care needs",
    problem_list: [
        "Conventional products do not meet specific needs",
        "Specialized treatments with high cost and low accessibility",
        "Underserved market with few technological solutions",
        "Lack of knowledge about proper skin preparation",
    ],

    solution_title: "Our Solution",
    solution_subtitle: [
        "Ecosystem that aligns pharmaceutical technology,",
        "digital technology and emotional support",
    ],
    solution_patents: "Two patents valued at $37M",
    products: [
        Product {
            name: "BIOCIC",
            title: "Regenerative Nanotechnology",
            description: "Biomimetics that guarantees cellular-level absorption and 2x faster regeneration",
        },
        Product {
            name: "BIOBLOC",
            title: "Sensitive Cleansing",
            description: "Cleansing technology with syndet pH that preserves the skin barrier",
        },
        Product {
            name: "NARA AI",
            title: "Artificial Intelligence",
            description: "Personalized monitoring of patient skin evolution",
        },
    ],

    validation_title: "Scientific and Market Validation",
    validation_subtitle: "Proven at internationally recognized institutions",
    validation_stats: [
        Entry {
            title: "Partner Hospitals",
            description: "Hospital do Amor, HC-UFMG/USP, Hospital da Baleia",
        },
        Entry {
            title: "International Publications",
            description: "Scientific articles in high-impact journals",
        },
        Entry {
            title: "Patients Treated",
            description: "Clinical validation with proven results",
        },
        Entry {
            title: "Products in Market",
            description: "Complete portfolio registered with ANVISA",
        },
    ],

    growth_title: "Growth Trajectory",
    growth_subtitle: "Proven exponential growth year after year",
    growth_milestones: [
        Entry {
            title: "The Journey Begins",
            description: "First products on the market with BIOCIC/BIOBLOC technology",
        },
        Entry {
            title: "Clinical Validation",
            description: "Partnerships with renowned hospitals confirm efficacy",
        },
        Entry {
            title: "Current Expansion",
            description: "11 ANVISA products, sustained growth",
        },
        Entry {
            title: "Investment Goal",
            description: "Double revenue with the round's resources",
        },
        Entry {
            title: "Acceleration",
            description: "34 formulations in the pharmaceutical market",
        },
        Entry {
            title: "Consolidation",
            description: "Sensitive skin leader in Brazil",
        },
    ],
    growth_actual: "Actual",
    growth_projection: "Projection",
    growth_rate: "growth",
    play: "Play",
    pause: "Pause",

    investment_title: "Investment Opportunity",
    investment_subtitle: "Participate in the Brazilian dermatological care revolution",
    modality: "Type",
    modality_value: "Convertible Note",
    capture_goal: "Funding Target",
    minimum_ticket: "Minimum Ticket",
    investment_format: "Format",
    investment_format_value: "20 tickets of $100k",
    term: "Round Period",
    term_value: "08/10 to 09/10",

    protection_title: "Investor Protection",
    protection_subtitle: "Solid governance and guaranteed rights",
    protections: [
        Entry {
            title: "Governance",
            description: "Board seat + veto rights for investments >$200k",
        },
        Entry {
            title: "Information Rights",
            description: "Monthly reports + access to operational metrics",
        },
        Entry {
            title: "Tag Along",
            description: "Right to sell on the same terms as the founders",
        },
        Entry {
            title: "Founder Vesting",
            description: "4-year schedule ensuring commitment",
        },
        Entry {
            title: "Anti-Dilution",
            description: "Full-ratchet protection against down rounds",
        },
        Entry {
            title: "Monitoring",
            description: "Entry to investor group and access to quarterly performance dashboard",
        },
    ],

    funds_title: "Detailed Use of Resources",
    funds_subtitle: "Complete transparency in capital application",
    funds_overview: "Strategic investment to accelerate growth and consolidate technological leadership",
    fund_allocations: [
        FundAllocation {
            title: "Factory & Technology",
            items: [
                "Nanotechnology equipment",
                "GMP systems",
                "International certifications",
            ],
            impact_label: "Production capacity",
            impact_value: "1M+ units/year",
        },
        FundAllocation {
            title: "Commercial Expansion",
            items: [
                "B2C: Direct to consumer via 5,000+ pharmacies",
                "B2B: Clinics and medical offices",
                "B2G: SUS tenders and public hospitals",
            ],
            impact_label: "Sales points",
            impact_value: "5,000+ pharmacies",
        },
        FundAllocation {
            title: "New Products",
            items: [
                "Register 34 developed SKUs with ANVISA",
                "Packaging and marketing development",
                "Stability studies and validation",
            ],
            impact_label: "Complete portfolio",
            impact_value: "34 new SKUs",
        },
        FundAllocation {
            title: "Strategic & Reserve",
            items: [
                "Working capital and contingency",
                "Strategic opportunities",
                "Series A preparation",
            ],
            impact_label: "Flexibility",
            impact_value: "18 months of runway",
        },
    ],

    timeline_title: "Execution Timeline",
    timeline_subtitle: "Clear strategy for the next 24 months",
    timeline: [
        Entry {
            title: "Month 1-2: Fundraising Preparation",
            description: "Documentation finalization, valuation expectations adjustment, and pitch deck and data room preparation.",
        },
        Entry {
            title: "Month 3-4: Roadshow and Negotiation",
            description: "Investor presentations, term negotiations, and due diligence.",
        },
        Entry {
            title: "Month 5-6: Closing and Planning",
            description: "Document signing, resource receipt and detailed execution plan.",
        },
        Entry {
            title: "Month 7-12: Factory Construction",
            description: "Factory construction start, equipment acquisition, and technical team hiring.",
        },
        Entry {
            title: "Month 13-18: Commercial Expansion",
            description: "New product launches, distribution channel expansion, and factory operation start.",
        },
        Entry {
            title: "Month 18-24: Series A Preparation",
            description: "Growth metrics consolidation, international expansion, and next funding round preparation.",
        },
    ],

    roi_title: "ROI Calculator",
    roi_subtitle: "Project your return on investment based on fixed assumptions",
    investment_value: "Investment Amount",
    equity_participation: "Equity Participation",
    investment_period: "Investment Period",
    years: "years",
    growth_scenario: "Growth Scenario",
    realistic: "Base Scenario",
    optimistic: "Ascending Scenario",
    scenario_assumptions: "Selected Scenario Assumptions:",
    realistic_assumptions: [
        "Total ROI: 99.31% (5 years)",
        "Exit multiple: 1.9931x",
        "Annualized return: 14.79% p.a.",
        "Post-Money Valuation: $29.1M",
    ],
    optimistic_assumptions: [
        "Total ROI: 199% (5 years)",
        "Exit multiple: 2.99x",
        "Annualized return: 24.48% p.a.",
        "Post-Money Valuation: $29.1M",
    ],
    initial_investment: "Initial Investment",
    final_value_label: "Estimated Final Value",
    total_return: "Total Return",
    total_roi: "Total ROI",
    annualized_return: "Annualized Return",
    per_year: "p.a.",
    roi_warning: "⚠️ Important Warning",
    risk_disclaimer: "The projections presented are estimates based on market assumptions and expected performance. Startup investments involve significant risks and returns are not guaranteed. Past performance is not indicative of future results.",

    cta_title: "Be Part of This Story",
    cta_description: [
        "Invest in patented technology with +10 years of research",
        "Limited round: 08/01 to 08/15 • Minimum ticket: $100k",
    ],
    cta_primary: "I Want to Invest",
    download_presentation: "Download Presentations & Graphic Materials",

    form: FormCopy {
        title: "Investor Registration",
        subtitle: "Fill in your information to take part in Pele Rara's investment opportunities",
        step_titles: [
            "Personal Information",
            "Address",
            "Financial Information",
            "Investment Details",
            "Terms and Confirmation",
        ],
        step_counter: "Step",
        step_of: "of",

        qualification_section: "Investor Qualification (CVM)",
        terms_section: "Terms and Conditions",

        full_name: "Full Name",
        email: "Email",
        phone: "Phone",
        cpf: "CPF",
        rg: "RG",
        birth_date: "Birth Date",
        nationality: "Nationality",
        address: "Complete Address",
        city: "City",
        state: "State",
        zip_code: "ZIP Code",
        country: "Country",
        occupation: "Occupation",
        company: "Company",
        position: "Position",
        work_experience: "Years of Experience",
        monthly_income: "Monthly Income",
        total_assets: "Total Assets",
        investment_experience: "Investment Experience",
        risk_profile: "Risk Profile",
        intended_investment: "Intended Investment Amount",
        investment_horizon: "Investment Horizon",
        motivations: "Investment Motivations",
        accredited_status: "Qualified Investor Status",
        accreditation_proof: "Qualification Proof",
        professional_certification: "Professional Certifications",
        how_did_you_hear: "How did you hear about Pele Rara?",
        additional_comments: "Additional Comments",

        full_name_placeholder: "Your full name",
        email_placeholder: "you@email.com",
        phone_placeholder: "(11) 99999-9999",
        cpf_placeholder: "000.000.000-00",
        rg_placeholder: "00.000.000-0",
        address_placeholder: "Street, number, complement",
        city_placeholder: "Your city",
        zip_code_placeholder: "00000-000",
        occupation_placeholder: "Your profession",
        company_placeholder: "Company name",
        position_placeholder: "Your position",
        motivations_placeholder: "Describe your motivations and expectations for this investment",
        certification_placeholder: "Ex: CPA-20, CFA, CNPI (if applicable)",
        comments_placeholder: "Additional information, questions or comments",

        select_option: "Select...",
        select_state: "Select state",
        select_income_range: "Select your income range",
        select_assets_range: "Select your assets range",
        select_investment_value: "Select amount",
        select_qualification_proof: "How can you prove it?",

        work_experience_options: [
            "0-2 years",
            "3-5 years",
            "6-10 years",
            "11-15 years",
            "16-20 years",
            "More than 20 years",
        ],
        income_options: [
            "Up to $1,000",
            "$1,001 - $2,000",
            "$2,001 - $4,000",
            "$4,001 - $10,000",
            "$10,001 - $20,000",
            "Above $20,000",
        ],
        assets_options: [
            "Up to $20,000",
            "$20,001 - $60,000",
            "$60,001 - $200,000",
            "$200,001 - $1,000,000",
            "$1,000,001 - $2,000,000",
            "Above $2,000,000",
        ],
        investment_experience_options: [
            "Beginner (savings, CDs)",
            "Intermediate (funds, stocks)",
            "Advanced (derivatives, FIPs)",
            "Professional (asset management)",
        ],
        risk_profile_options: ["Conservative", "Moderate", "Aggressive", "Super Aggressive"],
        investment_value_options: [
            "$10,000 - $20,000",
            "$20,001 - $50,000",
            "$50,001 - $100,000",
            "$100,001 - $200,000",
            "$200,001 - $400,000",
            "Above $400,000",
        ],
        investment_horizon_options: ["3 - 5 years", "5-10 years", "More than 10 years"],
        accredited_status_options: [
            "I have financial assets of at least $200,000",
            "I hold a professional certification (CPA-20, CFA, CNPI, etc.)",
            "I am a financial market professional",
            "I need to verify my qualification",
        ],
        accreditation_proof_options: [
            "Brokerage statement",
            "Tax return",
            "Professional certificate",
            "Employer letter",
            "Other documents",
        ],
        how_did_you_hear_options: [
            "LinkedIn",
            "Google",
            "Referral",
            "Media (newspaper, magazine)",
            "Event",
            "Company website",
            "Others",
        ],

        qualified_warning_title: "Important Warning",
        qualified_warning_text: "This investment involves significant risks and may result in the total loss of the invested capital. Read all documents carefully before making your investment decision.",

        agree_terms: "I agree to the Terms of Use and declare that I am aware of the risks associated with investments in private companies",
        agree_privacy: "I agree to the Privacy Policy and authorize the processing of my data in accordance with LGPD",
        confirm_accuracy: "I declare that all information provided is true and accurate",
        authorize_contact: "I authorize Pele Rara to contact me to present investment opportunities",

        previous: "Previous",
        next: "Next",
        submit: "Submit Registration",
        submitting: "Submitting...",

        missing_field: "Please fill in the required field:",
        missing_consents: "Please accept all required terms.",
        relay_success: "✅ Form submitted successfully!",
        fallback_opened: "📧 Opening your email client to send the form...",

        interest_registered: "Interest Successfully Registered!",
        relay_success_detail: "Your registration form was sent to",
        next_steps_title: "Next Steps:",
        next_steps: [
            "Our team will review your information within 24 business hours",
            "You will receive an NDA (Non-Disclosure Agreement) to sign",
            "We will schedule a meeting for a detailed presentation of the opportunity",
            "We will start the due diligence and documentation process",
        ],
        email_opened_automatically: "Your email client was automatically opened with all information pre-filled.",
        recipient_email: "Recipient:",
        whatsapp_contact: "WhatsApp:",
        email_not_opened: "If the email didn't open automatically, click the button below:",
        open_email_button: "Open Email to Cynthia",
        submit_new_interest: "Submit New Interest",
    },

    modal: ModalCopy {
        title: "How would you like to invest?",
        subtitle: "Choose the best way to get in touch with us",
        minimum_badge: "Minimum investment: $100k",
        recommended: "Recommended",
        form_title: "Qualified Investor Registration",
        official_contact: "Official contact:",
        register_title: "Full Investor Registration",
        register_description: "Complete form with qualified investor verification",
        whatsapp_title: "Direct WhatsApp",
        whatsapp_description: "Talk to our team right now",
        email_title: "Email for a Meeting",
        email_description: "Send your interest by email",
        website_title: "Official Website",
        website_description: "Learn more about the company",
        back: "← Back",
        close: "Close",
    },

    faq_title: "Frequently Asked Questions from Investors",
    faq_subtitle: "We clarify the main questions about the opportunity",
    faq_contact: "Have other questions?",
    faq_contact_link: "Contact us",
    faq: [
        Faq {
            question: "What is Pele Rara's competitive advantage?",
            answer: "We have two patented technologies (BIOCIC and BIOBLOC) with international scientific validation, partnerships with leading hospitals, and a $3.7 trillion global market. Our proprietary nanotechnology delivers 2x faster results than conventional products.",
        },
        Faq {
            question: "How does the convertible note work?",
            answer: "Investment will be made via convertible note with 24-month term, $40M valuation cap and 30% discount. In the next round (Series A), the amount automatically converts to equity with advantageous conditions for the investor.",
        },
        Faq {
            question: "What are the guarantees for investors?",
            answer: "We offer solid guarantees: patents filed with INPI (value between $19-37M), products already registered with ANVISA, proven recurring revenue, hospital contracts, and a detailed business plan with clear growth targets.",
        },
        Faq {
            question: "What is the exit strategy for investors?",
            answer: "We plan Series A in 24 months, with possibility of IPO in 5-7 years or strategic acquisition by pharmaceutical multinationals. The dermocosmetics market has historical multiples of 15-25x EBITDA in similar transactions.",
        },
        Faq {
            question: "How will the raised capital be used?",
            answer: "$800k for nanoparticle factory construction, $800k for commercial expansion (B2C/B2B/B2G), and $400k for launching the 34 SKUs already developed. With minimum ticket of $100k, each dollar invested has projected ROI above 10x in 5 years.",
        },
        Faq {
            question: "What is the regulatory status of the products?",
            answer: "We already have 11 products registered with ANVISA and 34 more formulations developed ready for registration. Our patents are filed with INPI and we have clinical studies approved by ethics committees of university hospitals.",
        },
    ],

    footer_text: "Our skin is our story",
    footer_motto: "We celebrate every mark",
    footer_additional: "AFTER ALL, ONLY THOSE WHO SURVIVED HAVE SCARS",

    investment_email_subject: "Investment Interest - Pele Rara",
    investment_email_body: "I would like to schedule a meeting to learn about the investment opportunity.\n\nName:\nPhone:\nCompany:\nInterest Ticket:",
    whatsapp_message: "Hello! I am interested in Pele Rara investment opportunity. I would like to schedule a meeting to learn more details.",
    whatsapp_tooltip: "Talk to us on WhatsApp",
    language_selector_label: "Language",
    image_unavailable: "Image unavailable",
    not_found_title: "Page not found",
    not_found_text: "The address you requested does not exist.",
    back_home: "Back to home",
};
