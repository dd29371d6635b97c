//! Employee dimension: staffing derived from each branch's size tier.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use clinicgen_core::{Branch, EmployeeRow};

use crate::errors::GenerationError;
use crate::sampling::{random_date, staff_epoch};

/// Hire dates fall in this many days after the staff epoch.
const HIRE_WINDOW_DAYS: i64 = 1200;

/// Build the employee roster, one block per branch, positions in template
/// order so employee ids are stable across runs.
pub fn build_employees(
    branches: &[Branch],
    rng: &mut ChaCha8Rng,
) -> Result<Vec<EmployeeRow>, GenerationError> {
    let epoch = staff_epoch()?;
    let mut rows = Vec::new();
    let mut employee_id = 1_u32;

    for branch in branches {
        for (position, count) in branch.size.staffing() {
            let (salary_min, salary_max) = position.salary_range();
            for slot in 1..=count {
                rows.push(EmployeeRow {
                    employee_id,
                    employee_code: format!("EMP{employee_id:04}"),
                    employee_name: format!(
                        "{} {} สาขา {}",
                        position.label(),
                        slot,
                        branch.branch_id
                    ),
                    position,
                    department: position.department(),
                    branch_id: branch.branch_id,
                    monthly_salary: rng.random_range(salary_min..=salary_max),
                    hire_date: random_date(rng, epoch, HIRE_WINDOW_DAYS),
                    status: "Active",
                });
                employee_id += 1;
            }
        }
    }

    Ok(rows)
}
