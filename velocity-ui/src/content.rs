//! Marketing copy as typed data

use crate::waitlist::Plan;

pub const PRODUCT_NAME: &str = "Velocity Logic";
pub const COMPANY_NAME: &str = "Velocity Logic Inc.";

#[derive(Debug, Clone, PartialEq)]
pub struct PricingTier {
    pub plan: Plan,
    pub name: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [&'static str],
    pub replaces: &'static str,
    pub highlight: bool,
}

pub static PRICING_TIERS: [PricingTier; 2] = [
    PricingTier {
        plan: Plan::Standard,
        name: "Standard Plan",
        price: "$299",
        subtitle: "Perfect for the solo operator looking to reclaim their evenings.",
        features: &["Instant Email Drafting", "Basic Price List Logic"],
        replaces: "Your Sunday evenings",
        highlight: false,
    },
    PricingTier {
        plan: Plan::Pro,
        name: "Pro Plan",
        price: "$599",
        subtitle: "For the scaling shop that needs full integration and automation.",
        features: &[
            "Smart Inventory Lookup",
            "CRM Integration (Push to Jobber)",
            "Priority Support",
        ],
        replaces: "A $4,000/mo Admin",
        highlight: true,
    },
];

pub fn tier_for(plan: Plan) -> &'static PricingTier {
    match plan {
        Plan::Standard => &PRICING_TIERS[0],
        Plan::Pro => &PRICING_TIERS[1],
    }
}

/// One row of the competitor comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub competitor: &'static str,
    pub us: &'static str,
    pub highlight_us: bool,
    pub competitor_bad: bool,
    pub us_good: bool,
}

pub static COMPARISON_ROWS: [ComparisonRow; 5] = [
    ComparisonRow {
        feature: "Primary Goal",
        competitor: "Organize Paperwork",
        us: "Generate Revenue",
        highlight_us: true,
        competitor_bad: false,
        us_good: false,
    },
    ComparisonRow {
        feature: "Input Method",
        competitor: "Manual Typing / Web Forms",
        us: "Auto-Reads Emails",
        highlight_us: false,
        competitor_bad: false,
        us_good: false,
    },
    ComparisonRow {
        feature: "Inventory Check",
        competitor: "Manual Lookups",
        us: "Auto-Scan Spreadsheets",
        highlight_us: false,
        competitor_bad: true,
        us_good: true,
    },
    ComparisonRow {
        feature: "Response Time",
        competitor: "Hours (Human Dependent)",
        us: "Seconds (Automated)",
        highlight_us: true,
        competitor_bad: false,
        us_good: false,
    },
    ComparisonRow {
        feature: "Weekend Mode",
        competitor: "You lose the lead",
        us: "You win the lead",
        highlight_us: false,
        competitor_bad: true,
        us_good: true,
    },
];

pub struct FeatureItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [FeatureItem; 3] = [
    FeatureItem {
        icon: "🗄",
        title: "Know Your Stock",
        description: "Stop guessing if you have the part. Our system scans your inventory sheets \
                      in real-time to quote based on actual stock levels. It never promises what \
                      you can't deliver.",
    },
    FeatureItem {
        icon: "✉",
        title: "Reads Messy Emails",
        description: "Customers don't fill out web forms perfectly. Velocity Logic reads raw \
                      emails, texts, and voice notes and turns them into professional estimates.",
    },
    FeatureItem {
        icon: "🧮",
        title: "It Does The Math",
        description: "Square footage? Linear feet? Waste factor? Our system reads the email \
                      ('I need a 20x20 deck') and calculates the materials for you.",
    },
];

pub static OLD_WAY: [&str; 3] = [
    "Manual forms that customers hate",
    "Distracting notifications on the job",
    "Late night manual quoting",
];

pub static NEW_WAY: [&str; 3] = [
    "Instantly reads customer emails",
    "Checks your stock automatically",
    "Drafts sent in 30 seconds",
];

pub static INTEGRATIONS: [(&str, &str); 3] = [
    ("Jobber API", "bg-green-500"),
    ("ServiceTitan", "bg-blue-500"),
    ("QBO", "bg-green-600"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_highlighted_tier_per_plan() {
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.highlight).count(), 1);
        for plan in [Plan::Standard, Plan::Pro] {
            assert_eq!(tier_for(plan).plan, plan);
        }
        assert_eq!(tier_for(Plan::Pro).price, "$599");
    }

    #[test]
    fn test_comparison_marks_are_consistent() {
        for row in &COMPARISON_ROWS {
            // A bad competitor cell is always paired with a good cell of ours
            assert_eq!(row.competitor_bad, row.us_good, "{}", row.feature);
        }
    }
}
