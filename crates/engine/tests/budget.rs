use engine::{
    Advice, BudgetState, BudgetStatus, Category, Credentials, Money, Session, SkipReason,
    StaticAuthenticator, import, progress_percentage,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn logged_in() -> Session<StaticAuthenticator> {
    let mut session = Session::new(StaticAuthenticator::new("joeyang", "1234").unwrap());
    session
        .login(&Credentials::new("joeyang", "1234"))
        .unwrap();
    session
}

#[test]
fn monthly_scenario() {
    let mut state = BudgetState::new();
    state.set_income("5000");

    let summary = state.summary();
    assert_eq!(summary.category(Category::Needs).budget, Money::from(2500));
    assert_eq!(summary.category(Category::Wants).budget, Money::from(1500));
    assert_eq!(summary.category(Category::Savings).budget, Money::from(1000));

    assert!(state.add_expense(Category::Needs, "Rent", "1200"));

    let needs = *state.summary().category(Category::Needs);
    assert_eq!(needs.spent, Money::from(1200));
    assert_eq!(needs.remaining, Money::from(1300));
    assert_eq!(needs.progress, dec!(48));
    assert_eq!(needs.status, BudgetStatus::OnTrack);
}

#[test]
fn reimport_appends_identical_records() {
    let mut state = BudgetState::new();
    let text = "needs\tRent\t1200\n";

    state.merge(import::parse(text));
    state.merge(import::parse(text));

    let needs = state.expenses(Category::Needs);
    assert_eq!(needs.len(), 2);
    assert_eq!(needs[0], needs[1]);
    assert_eq!(needs[0].name, "Rent");
    assert_eq!(needs[0].amount, Money::from(1200));
}

#[test]
fn import_merges_after_manual_entries() {
    let mut state = BudgetState::new();
    state.set_income("4000");
    state.add_expense(Category::Wants, "Concert", "80");

    let pasted = "Wants\tDining Out\t$150.00\n\
                  bogus\tX\t10\n\
                  Savings\tEmergency Fund\t400\n\
                  needs\tOnly\tTwo\n\
                  need\tGroceries\t$1,020.25";
    let (batch, report) = import::parse_with_report(pasted);
    state.merge(batch);

    assert_eq!(report.imported, 3);
    let skipped: Vec<_> = report.skipped.iter().map(|s| (s.line, s.reason)).collect();
    assert_eq!(
        skipped,
        vec![(2, SkipReason::UnknownCategory), (4, SkipReason::InvalidAmount)]
    );

    let wants: Vec<_> = state
        .expenses(Category::Wants)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(wants, vec!["Concert", "Dining Out"]);
    assert_eq!(state.spent_for(Category::Needs), Money::new(dec!(1020.25)));
    assert_eq!(state.spent_for(Category::Savings), Money::from(400));
    assert_eq!(state.remaining_for(Category::Savings), Money::from(400));
}

#[test]
fn zero_income_hides_overspend_in_progress() {
    let mut state = BudgetState::new();
    state.add_expense(Category::Wants, "Game", "60");

    let wants = *state.summary().category(Category::Wants);
    assert_eq!(wants.progress, Decimal::ZERO);
    assert_eq!(wants.remaining, Money::from(-60));
    assert_eq!(wants.status, BudgetStatus::OverBudget);
    assert_eq!(progress_percentage(Money::from(60), Money::ZERO), Decimal::ZERO);
}

#[test]
fn session_round_trip() {
    let mut session = logged_in();
    {
        let state = session.state_mut().unwrap();
        state.set_income("1000");
        state.merge(import::parse("wants\tShoes\t350"));
    }
    let summary = session.state().unwrap().summary();
    assert_eq!(Advice::for_summary(&summary), Advice::WantsOver(Money::from(50)));

    session.logout();
    assert!(session.state().is_none());
}

#[test]
fn export_then_import_restores_buckets() {
    let mut state = BudgetState::new();
    state.add_expense(Category::Needs, "Rent", "1200");
    state.add_expense(Category::Wants, "Dining Out", "150.75");
    state.add_expense(Category::Savings, "Fund", "400");

    let tsv = import::export_tsv(state.buckets()).unwrap();
    let mut restored = BudgetState::new();
    restored.merge(import::parse(&tsv));

    assert_eq!(restored.buckets(), state.buckets());
}
