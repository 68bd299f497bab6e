// 🇺🇸 United States

use super::{LocaleFields, RegionTable, TopicEntry};
use crate::region::RegionCode;

// No explainer in this entry; `audit()` reports it and rendering fails on it.
const CREDIT_SCORE: LocaleFields = LocaleFields {
    region: "United States",
    language: "English",
    currency: "USD",
    local_context: "credit cards, loan approvals, and interest rates tied to FICO scored",
    pitfalls: "missing payments, high credit utilization, closing old accounts",
    explainer: "",
    examples: "- Paying off a $500 credit card balance\n- Taking a $2000 car loan\n- Improving from 650 to 720 credit score can save thousands in interest over time",
    step1: "Check your credit report for free using trusted services",
    step2: "Pay at least the minimum balance on all loans",
    step3: "Keep credit utilization below 30%",
};

const GENERAL: LocaleFields = LocaleFields {
    region: "United States",
    language: "English",
    currency: "USD",
    local_context: "basic banking and personal finance principles apply",
    pitfalls: "ignoring credit reports, overspending, not saving",
    explainer: " Financial literacy helps individuals make better money decisions and plan for the future.",
    examples: "- Saving $100/month\n- Opening a retirement account\n- Avoiding unnecessary debt",
    step1: "Track your expenses",
    step2: "Build an emergency fund",
    step3: "Invest early for retirement",
};

pub static TABLE: RegionTable = RegionTable {
    code: RegionCode::US,
    entries: &[TopicEntry {
        topics: &["credit score"],
        fields: CREDIT_SCORE,
    }],
    default: GENERAL,
};
