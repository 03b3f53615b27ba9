//! End-to-end menu sessions driven by a scripted prompter.

use rust_decimal_macros::dec;

use roster::cli::menu::{Action, Dispatcher};
use roster::domain::NO_MANAGER;
use roster::store::Gateway;
use roster::testkit::{memory_pool, ScriptedPrompter};

#[test]
fn full_session_builds_a_company_and_quits() {
    let pool = memory_pool();
    let gateway = Gateway::new(pool.clone());
    let inspect = Gateway::new(pool);

    let mut prompter = ScriptedPrompter::new();

    prompter.push_action(Action::AddDepartment);
    prompter.push_answers(&[("name", "Engineering")]);

    prompter.push_action(Action::AddRole);
    prompter.push_answers(&[
        ("title", "Engineer"),
        ("salary", "90000"),
        ("department", "Engineering"),
    ]);

    prompter.push_action(Action::AddEmployee);
    prompter.push_answers(&[
        ("first", "Ada"),
        ("last", "Lovelace"),
        ("role", "Engineer"),
        ("manager", NO_MANAGER),
    ]);

    prompter.push_action(Action::AddEmployee);
    prompter.push_answers(&[
        ("first", "Alan"),
        ("last", "Turing"),
        ("role", "Engineer"),
        ("manager", "Ada Lovelace"),
    ]);

    // View actions take no input but still consume an answer set slot.
    prompter.push_action(Action::ViewEmployees);
    prompter.push_answers(&[]);

    prompter.push_action(Action::Quit);

    let mut dispatcher = Dispatcher::new(gateway, prompter);
    dispatcher.run().expect("session completes");

    let employees = inspect.list_employees().expect("list employees");
    assert_eq!(employees.len(), 2);

    let ada = employees.iter().find(|e| e.first_name == "Ada").unwrap();
    assert_eq!(ada.title.as_deref(), Some("Engineer"));
    assert_eq!(ada.salary, Some(dec!(90000)));
    assert_eq!(ada.manager, None);

    let alan = employees.iter().find(|e| e.first_name == "Alan").unwrap();
    assert_eq!(alan.manager.as_deref(), Some("Ada Lovelace"));

    assert_eq!(inspect.list_managers().unwrap(), vec!["Ada Lovelace"]);
}

#[test]
fn failed_action_does_not_end_the_session() {
    let pool = memory_pool();
    let gateway = Gateway::new(pool.clone());
    let inspect = Gateway::new(pool);

    let mut prompter = ScriptedPrompter::new();

    // No departments exist yet, so Add Role aborts with a diagnostic
    // before any prompt is shown.
    prompter.push_action(Action::AddRole);

    prompter.push_action(Action::AddDepartment);
    prompter.push_answers(&[("name", "Engineering")]);

    prompter.push_action(Action::Quit);

    let mut dispatcher = Dispatcher::new(gateway, prompter);
    dispatcher.run().expect("session completes");

    let departments = inspect.list_departments().expect("list departments");
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Engineering");
}

#[test]
fn update_and_delete_flows_round_trip() {
    let pool = memory_pool();
    let gateway = Gateway::new(pool.clone());
    let inspect = Gateway::new(pool);

    inspect.add_department("Engineering").unwrap();
    inspect.add_department("Sales").unwrap();
    inspect.add_role("Engineer", dec!(90000), "Engineering").unwrap();
    inspect
        .add_role("Account Executive", dec!(70000), "Sales")
        .unwrap();
    inspect
        .add_employee("Ada", "Lovelace", "Engineer", NO_MANAGER)
        .unwrap();
    inspect
        .add_employee("Grace", "Hopper", "Account Executive", "Ada Lovelace")
        .unwrap();

    let mut prompter = ScriptedPrompter::new();

    prompter.push_action(Action::UpdateEmployeeRole);
    prompter.push_answers(&[("employee", "Grace Hopper"), ("role", "Engineer")]);

    prompter.push_action(Action::UpdateEmployeeManager);
    prompter.push_answers(&[("employee", "Grace Hopper"), ("manager", NO_MANAGER)]);

    prompter.push_action(Action::DeleteEmployee);
    prompter.push_answers(&[("employee", "Ada Lovelace")]);

    prompter.push_action(Action::DeleteRole);
    prompter.push_answers(&[("role", "Account Executive")]);

    prompter.push_action(Action::DeleteDepartment);
    prompter.push_answers(&[("department", "Sales")]);

    prompter.push_action(Action::Quit);

    let mut dispatcher = Dispatcher::new(gateway, prompter);
    dispatcher.run().expect("session completes");

    let employees = inspect.list_employees().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].full_name(), "Grace Hopper");
    assert_eq!(employees[0].title.as_deref(), Some("Engineer"));
    assert_eq!(employees[0].manager, None);

    let departments = inspect.list_departments().unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Engineering");
}

#[test]
fn view_by_department_matches_filtered_listing() {
    let pool = memory_pool();
    let gateway = Gateway::new(pool);

    gateway.add_department("Engineering").unwrap();
    gateway.add_department("Sales").unwrap();
    gateway.add_role("Engineer", dec!(90000), "Engineering").unwrap();
    gateway
        .add_role("Account Executive", dec!(70000), "Sales")
        .unwrap();
    gateway
        .add_employee("Ada", "Lovelace", "Engineer", NO_MANAGER)
        .unwrap();
    gateway
        .add_employee("Grace", "Hopper", "Account Executive", NO_MANAGER)
        .unwrap();

    let by_department = gateway.list_employees_by_department("Sales").unwrap();
    let expected: Vec<_> = gateway
        .list_employees()
        .unwrap()
        .into_iter()
        .filter(|e| e.department.as_deref() == Some("Sales"))
        .collect();
    assert_eq!(by_department, expected);

    let budgets = gateway.utilized_budget_by_department().unwrap();
    assert_eq!(budgets[0].department, "Engineering");
    assert_eq!(budgets[0].utilized_budget, dec!(90000));
}
