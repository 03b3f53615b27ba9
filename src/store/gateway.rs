//! Domain-specific read/write operations against the relational store.
//!
//! Every operation takes primitives and wraps store-level failures with
//! the operation that issued them. Compound names are resolved to ids
//! immediately and never passed through further query construction;
//! resolve-then-use writes run inside a single transaction.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::{Double, Integer, Nullable, Text};
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    self, BudgetLine, Department, EmployeeOverview, FullName, RoleOverview, NO_MANAGER,
};
use crate::error::{Error, Result};
use crate::store::schema::{departments, employees, roles};
use crate::store::DbPool;

type PooledConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Shared SELECT for the wide employee listing. All joins are LEFT joins
/// so employees with an unset role or manager still appear.
const EMPLOYEE_LISTING_SQL: &str = "\
SELECT e.id, e.first_name, e.last_name, r.title, d.name AS department, r.salary, \
       m.first_name || ' ' || m.last_name AS manager \
  FROM employees e \
  LEFT JOIN roles r ON r.id = e.role_id \
  LEFT JOIN departments d ON d.id = r.department_id \
  LEFT JOIN employees m ON m.id = e.manager_id";

const MANAGER_LISTING_SQL: &str = "\
SELECT DISTINCT m.first_name || ' ' || m.last_name AS name \
  FROM employees e \
  JOIN employees m ON m.id = e.manager_id \
 ORDER BY name";

const BUDGET_SQL: &str = "\
SELECT d.name AS department, SUM(r.salary) AS utilized_budget \
  FROM employees e \
  JOIN roles r ON r.id = e.role_id \
  JOIN departments d ON d.id = r.department_id \
 GROUP BY d.id, d.name \
 ORDER BY utilized_budget DESC";

#[derive(QueryableByName)]
struct EmployeeWideRow {
    #[diesel(sql_type = Integer)]
    id: i32,
    #[diesel(sql_type = Text)]
    first_name: String,
    #[diesel(sql_type = Text)]
    last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    title: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    department: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    salary: Option<f64>,
    #[diesel(sql_type = Nullable<Text>)]
    manager: Option<String>,
}

impl From<EmployeeWideRow> for EmployeeOverview {
    fn from(row: EmployeeWideRow) -> Self {
        EmployeeOverview {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            title: row.title,
            department: row.department,
            salary: row.salary.map(domain::money),
            manager: row.manager,
        }
    }
}

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct BudgetWideRow {
    #[diesel(sql_type = Text)]
    department: String,
    #[diesel(sql_type = Double)]
    utilized_budget: f64,
}

/// Gateway issuing parameterized queries against the relational store.
pub struct Gateway {
    pool: DbPool,
}

impl Gateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConn> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    pub fn list_departments(&self) -> Result<Vec<Department>> {
        let mut conn = self.conn()?;
        let rows = departments::table
            .order(departments::id.asc())
            .load::<(i32, String)>(&mut conn)
            .map_err(|e| Error::store("retrieving departments", e))?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| Department { id, name })
            .collect())
    }

    pub fn add_department(&self, name: &str) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::insert_into(departments::table)
            .values(departments::name.eq(name))
            .execute(&mut conn)
            .map_err(|e| Error::store("adding department", e))?;
        debug!(name, "department added");
        Ok(())
    }

    /// Store-level no-op when no department matches. Deleting a department
    /// cascades to its roles, which in turn null out employee role links.
    pub fn delete_department(&self, name: &str) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::delete(departments::table.filter(departments::name.eq(name)))
            .execute(&mut conn)
            .map_err(|e| Error::store("deleting department", e))?;
        Ok(())
    }

    pub fn list_roles(&self) -> Result<Vec<RoleOverview>> {
        let mut conn = self.conn()?;
        let rows = roles::table
            .inner_join(departments::table)
            .select((roles::id, roles::title, departments::name, roles::salary))
            .order(roles::id.asc())
            .load::<(i32, String, String, f64)>(&mut conn)
            .map_err(|e| Error::store("retrieving roles", e))?;
        Ok(rows
            .into_iter()
            .map(|(id, title, department, salary)| RoleOverview {
                id,
                title,
                department,
                salary: domain::money(salary),
            })
            .collect())
    }

    /// Fails with a department-not-found error before attempting the
    /// insert; the lookup and the insert run as one transaction.
    pub fn add_role(&self, title: &str, salary: Decimal, department_name: &str) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<_, Error, _>(|conn| {
            let department_id = resolve::department(conn, department_name)?;
            diesel::insert_into(roles::table)
                .values((
                    roles::title.eq(title),
                    roles::salary.eq(domain::stored_money(salary)),
                    roles::department_id.eq(department_id),
                ))
                .execute(conn)
                .map_err(|e| Error::store("adding role", e))?;
            Ok(())
        })?;
        debug!(title, department = department_name, "role added");
        Ok(())
    }

    pub fn delete_role(&self, title: &str) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::delete(roles::table.filter(roles::title.eq(title)))
            .execute(&mut conn)
            .map_err(|e| Error::store("deleting role", e))?;
        Ok(())
    }

    pub fn list_employees(&self) -> Result<Vec<EmployeeOverview>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query(format!("{EMPLOYEE_LISTING_SQL} ORDER BY e.id"))
            .load::<EmployeeWideRow>(&mut conn)
            .map_err(|e| Error::store("retrieving employees", e))?;
        Ok(rows.into_iter().map(EmployeeOverview::from).collect())
    }

    /// The role must resolve; the manager may be the `"None"` sentinel,
    /// which stores a null reference.
    pub fn add_employee(
        &self,
        first: &str,
        last: &str,
        role_title: &str,
        manager_full_name: &str,
    ) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<_, Error, _>(|conn| {
            let role_id = resolve::role(conn, role_title)?;
            let manager_id = resolve::manager(conn, manager_full_name)?;
            diesel::insert_into(employees::table)
                .values((
                    employees::first_name.eq(first),
                    employees::last_name.eq(last),
                    employees::role_id.eq(Some(role_id)),
                    employees::manager_id.eq(manager_id),
                ))
                .execute(conn)
                .map_err(|e| Error::store("adding employee", e))?;
            Ok(())
        })?;
        debug!(first, last, role = role_title, "employee added");
        Ok(())
    }

    pub fn update_employee_role(&self, employee_full_name: &str, role_title: &str) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<_, Error, _>(|conn| {
            let employee_id = resolve::employee(conn, employee_full_name)?;
            let role_id = resolve::role(conn, role_title)?;
            diesel::update(employees::table.find(employee_id))
                .set(employees::role_id.eq(Some(role_id)))
                .execute(conn)
                .map_err(|e| Error::store("updating employee role", e))?;
            Ok(())
        })
    }

    pub fn update_employee_manager(
        &self,
        employee_full_name: &str,
        manager_full_name: &str,
    ) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<_, Error, _>(|conn| {
            let employee_id = resolve::employee(conn, employee_full_name)?;
            let manager_id = resolve::manager(conn, manager_full_name)?;
            diesel::update(employees::table.find(employee_id))
                .set(employees::manager_id.eq(manager_id))
                .execute(conn)
                .map_err(|e| Error::store("updating employee manager", e))?;
            Ok(())
        })
    }

    pub fn delete_employee(&self, full_name: &str) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<_, Error, _>(|conn| {
            let employee_id = resolve::employee(conn, full_name)?;
            diesel::delete(employees::table.find(employee_id))
                .execute(conn)
                .map_err(|e| Error::store("deleting employee", e))?;
            Ok(())
        })
    }

    /// Distinct full names of employees that appear as someone's manager.
    pub fn list_managers(&self) -> Result<Vec<String>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query(MANAGER_LISTING_SQL)
            .load::<NameRow>(&mut conn)
            .map_err(|e| Error::store("retrieving managers", e))?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    pub fn list_employees_by_manager(
        &self,
        manager_full_name: &str,
    ) -> Result<Vec<EmployeeOverview>> {
        let mut conn = self.conn()?;
        let manager_id = resolve::employee(&mut conn, manager_full_name).map_err(|e| match e {
            Error::ReferenceNotFound { name, .. } => Error::ReferenceNotFound {
                entity: "manager",
                name,
            },
            other => other,
        })?;
        let rows =
            diesel::sql_query(format!("{EMPLOYEE_LISTING_SQL} WHERE e.manager_id = ? ORDER BY e.id"))
                .bind::<Integer, _>(manager_id)
                .load::<EmployeeWideRow>(&mut conn)
                .map_err(|e| Error::store("retrieving employees by manager", e))?;
        Ok(rows.into_iter().map(EmployeeOverview::from).collect())
    }

    pub fn list_employees_by_department(
        &self,
        department_name: &str,
    ) -> Result<Vec<EmployeeOverview>> {
        let mut conn = self.conn()?;
        let department_id = resolve::department(&mut conn, department_name)?;
        let rows = diesel::sql_query(format!("{EMPLOYEE_LISTING_SQL} WHERE d.id = ? ORDER BY e.id"))
            .bind::<Integer, _>(department_id)
            .load::<EmployeeWideRow>(&mut conn)
            .map_err(|e| Error::store("retrieving employees by department", e))?;
        Ok(rows.into_iter().map(EmployeeOverview::from).collect())
    }

    /// Summed salary of employees currently holding a role per department,
    /// descending by total.
    pub fn utilized_budget_by_department(&self) -> Result<Vec<BudgetLine>> {
        let mut conn = self.conn()?;
        let rows = diesel::sql_query(BUDGET_SQL)
            .load::<BudgetWideRow>(&mut conn)
            .map_err(|e| Error::store("retrieving utilized budgets", e))?;
        Ok(rows
            .into_iter()
            .map(|r| BudgetLine {
                department: r.department,
                utilized_budget: domain::money(r.utilized_budget),
            })
            .collect())
    }
}

/// Name→id resolution. Ties on a duplicated name break towards the
/// lowest id, so repeated lookups always land on the same row.
mod resolve {
    use super::*;

    pub fn department(conn: &mut SqliteConnection, name: &str) -> Result<i32> {
        departments::table
            .filter(departments::name.eq(name))
            .select(departments::id)
            .order(departments::id.asc())
            .first::<i32>(conn)
            .optional()
            .map_err(|e| Error::store("resolving department", e))?
            .ok_or_else(|| Error::ReferenceNotFound {
                entity: "department",
                name: name.to_string(),
            })
    }

    pub fn role(conn: &mut SqliteConnection, title: &str) -> Result<i32> {
        roles::table
            .filter(roles::title.eq(title))
            .select(roles::id)
            .order(roles::id.asc())
            .first::<i32>(conn)
            .optional()
            .map_err(|e| Error::store("resolving role", e))?
            .ok_or_else(|| Error::ReferenceNotFound {
                entity: "role",
                name: title.to_string(),
            })
    }

    pub fn employee(conn: &mut SqliteConnection, full_name: &str) -> Result<i32> {
        let name = FullName::parse(full_name)?;
        employees::table
            .filter(employees::first_name.eq(&name.first))
            .filter(employees::last_name.eq(&name.last))
            .select(employees::id)
            .order(employees::id.asc())
            .first::<i32>(conn)
            .optional()
            .map_err(|e| Error::store("resolving employee", e))?
            .ok_or_else(|| Error::ReferenceNotFound {
                entity: "employee",
                name: full_name.to_string(),
            })
    }

    /// The `"None"` sentinel resolves to a null reference without a lookup.
    pub fn manager(conn: &mut SqliteConnection, full_name: &str) -> Result<Option<i32>> {
        if full_name == NO_MANAGER {
            return Ok(None);
        }
        employee(conn, full_name).map(Some).map_err(|e| match e {
            Error::ReferenceNotFound { name, .. } => Error::ReferenceNotFound {
                entity: "manager",
                name,
            },
            other => other,
        })
    }
}
