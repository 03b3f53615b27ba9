diesel::table! {
    departments (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    roles (id) {
        id -> Integer,
        title -> Text,
        salary -> Double,
        department_id -> Integer,
    }
}

diesel::table! {
    employees (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        role_id -> Nullable<Integer>,
        manager_id -> Nullable<Integer>,
    }
}

diesel::joinable!(roles -> departments (department_id));
diesel::joinable!(employees -> roles (role_id));

diesel::allow_tables_to_appear_in_same_query!(departments, roles, employees);
