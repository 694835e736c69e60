mod common;

use common::{day, dec, expense, income};
use finance_core::ledger::{Frequency, Plan};
use finance_core::projection::{
    find_negative_balance_date, plan_progress, project_plans, DEFAULT_HORIZON_DAYS,
};
use finance_core::security::{average_monthly_expense, classify, security_ratio, SecurityBands};
use rust_decimal::Decimal;

#[test]
fn projection_finds_the_first_negative_balance_day() {
    let today = day(2024, 6, 15);
    let defs = vec![expense("Aluguel", "200", Frequency::Monthly, day(2024, 7, 1))];

    let projection =
        find_negative_balance_date(&defs, dec("100"), today, today, DEFAULT_HORIZON_DAYS)
            .unwrap();

    assert_eq!(projection.date, day(2024, 7, 1));
    assert_eq!(projection.balance, dec("-100"));
    assert_eq!(projection.days_remaining, 16);
}

#[test]
fn days_remaining_counts_from_today_not_the_projection_start() {
    let today = day(2024, 6, 15);
    let start = day(2024, 6, 30);
    let defs = vec![expense("Aluguel", "200", Frequency::Monthly, day(2024, 7, 1))];

    let projection =
        find_negative_balance_date(&defs, dec("100"), start, today, DEFAULT_HORIZON_DAYS)
            .unwrap();

    assert_eq!(projection.date, day(2024, 7, 1));
    assert_eq!(projection.days_remaining, 16);
}

#[test]
fn projection_skips_flows_already_in_the_starting_balance() {
    let today = day(2024, 6, 15);
    let defs = vec![expense("Conta", "500", Frequency::Once, today)];

    assert!(find_negative_balance_date(&defs, dec("100"), today, today, DEFAULT_HORIZON_DAYS)
        .is_none());
}

#[test]
fn projection_returns_none_when_the_horizon_stays_positive() {
    let today = day(2024, 6, 15);
    let defs = vec![
        income("Salário", "3000", Frequency::Monthly, day(2024, 1, 5)),
        expense("Aluguel", "1200", Frequency::Monthly, day(2024, 1, 10)),
    ];

    assert!(
        find_negative_balance_date(&defs, dec("500"), today, today, DEFAULT_HORIZON_DAYS)
            .is_none()
    );
}

#[test]
fn plan_progress_is_clamped_to_the_percent_range() {
    let target = dec("1000");
    assert_eq!(plan_progress(dec("-500"), target), 0);
    assert_eq!(plan_progress(dec("0"), target), 0);
    assert_eq!(plan_progress(dec("500"), target), 50);
    assert_eq!(plan_progress(dec("1000"), target), 100);
    assert_eq!(plan_progress(dec("5000"), target), 100);
    assert_eq!(plan_progress(dec("334.9"), target), 33);
    assert_eq!(plan_progress(dec("335"), target), 34);
}

#[test]
fn project_plans_reports_progress_per_plan() {
    let plans = vec![
        Plan::new("Reserva de emergência", dec("10000"), None).unwrap(),
        Plan::new("Viagem", dec("2000"), Some(day(2025, 1, 15))).unwrap(),
    ];

    let projections = project_plans(&plans, dec("2500"));
    assert_eq!(projections.len(), 2);
    assert_eq!(projections[0].plan_id, plans[0].id);
    assert_eq!(projections[0].progress, 25);
    assert_eq!(projections[1].name, "Viagem");
    assert_eq!(projections[1].progress, 100);
}

#[test]
fn average_monthly_expense_spans_calendar_months() {
    let today = day(2024, 4, 20);
    let defs = vec![
        expense("Mercado", "300", Frequency::Once, day(2024, 1, 10)),
        expense("Oficina", "600", Frequency::Once, day(2024, 3, 5)),
        income("Salário", "4000", Frequency::Monthly, day(2024, 1, 5)),
    ];

    // 900 spent across the Jan..Mar span: three calendar months.
    assert_eq!(average_monthly_expense(&defs, today), dec("300"));
}

#[test]
fn average_monthly_expense_over_a_single_month_divides_by_one() {
    let today = day(2024, 4, 20);
    let defs = vec![
        expense("Mercado", "250", Frequency::Once, day(2024, 3, 5)),
        expense("Farmácia", "200", Frequency::Once, day(2024, 3, 22)),
    ];

    assert_eq!(average_monthly_expense(&defs, today), dec("450"));
}

#[test]
fn average_monthly_expense_ignores_the_current_month() {
    let today = day(2024, 4, 20);
    let defs = vec![expense("Mercado", "250", Frequency::Once, day(2024, 4, 5))];

    assert_eq!(average_monthly_expense(&defs, today), Decimal::ZERO);
}

#[test]
fn classification_follows_the_coverage_ratio() {
    let bands = SecurityBands::default();
    let today = day(2024, 4, 20);
    let defs = vec![expense("Aluguel", "1000", Frequency::Monthly, day(2024, 1, 10))];

    let average = average_monthly_expense(&defs, today);
    assert_eq!(average, dec("1000"));
    assert_eq!(security_ratio(dec("4500"), average), Some(dec("4.5")));
    assert_eq!(classify(dec("4500"), average, &bands).category, "Bom");
    assert_eq!(classify(dec("-10"), average, &bands).category, "Crítico");
    assert_eq!(
        classify(dec("4500"), Decimal::ZERO, &bands).category,
        bands.unrated.label
    );
}
