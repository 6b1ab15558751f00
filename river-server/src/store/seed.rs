//! Sample data for the memory backend
//!
//! The Pixell River branch network and a slice of its roster, loaded at
//! startup when `SEED_DATA` is enabled. Ids are pre-assigned sequential
//! integers, matching what the memory store would have handed out.

use shared::models::{Branch, Employee, RecordId};

fn branch(id: u64, name: &str, address: &str, phone_number: u64) -> Branch {
    Branch {
        id: RecordId::Seq(id),
        name: name.to_string(),
        address: address.to_string(),
        phone_number,
    }
}

fn employee(
    id: u64,
    name: &str,
    position: &str,
    department: &str,
    email: &str,
    phone_number: u64,
    branch_id: u64,
) -> Employee {
    Employee {
        id: RecordId::Seq(id),
        name: name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        email: email.to_string(),
        phone_number,
        branch_id: RecordId::Seq(branch_id),
    }
}

pub fn branches() -> Vec<Branch> {
    vec![
        branch(1, "Vancouver Branch", "1300 Burrard St, Vancouver, BC, V6Z 2C7", 6044560022),
        branch(2, "Edmonton Branch", "7250 82 Ave NW, Edmonton, AB, T6B 0G4", 7804686800),
        branch(3, "Arborg Branch", "317-A Fisher Road, Arborg, MB, R0C 0A0", 2045553461),
        branch(4, "Regina Branch", "3085 Albert, Regina, SK, S4S 0B1", 2066402877),
        branch(5, "Winnipeg Branch", "1 Portage Ave, Winnipeg, MB, R3B 2B9", 2049882402),
        branch(6, "Steinbach Branch", "330 Main St, Steinbach, MB, R5G 1Z1", 2043263495),
        branch(7, "Montréal Branch", "511 Rue Jean-Talon O, Montréal, QC, H3N 1R5", 5142775511),
        branch(8, "Toronto Branch", "440 Queen St W, Toronto, ON, M5V 2A8", 4169802500),
        branch(9, "Saint John Branch", "500 Fairville Blvd, Saint John, NB, E2M 5H7", 5066320225),
        branch(10, "Headingley Branch", "500 McIntosh Rd, Headingley, MB, R4H 1B6", 2049995555),
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee(1, "Alice Johnson", "Branch Manager", "Management", "alice.johnson@pixell-river.com", 6045550148, 1),
        employee(2, "Amandeep Singh", "Customer Service Representative", "Customer Service", "amandeep.singh@pixell-river.com", 7805550172, 2),
        employee(3, "Maria Garcia", "Loan Officer", "Loans", "maria.garcia@pixell-river.com", 2045550193, 3),
        employee(4, "James Wilson", "IT Support Specialist", "IT", "james.wilson@pixell-river.com", 6045550134, 1),
        employee(5, "Linda Martinez", "Financial Advisor", "Advisory", "linda.martinez@pixell-river.com", 7805550165, 2),
        employee(6, "Michael Brown", "Teller", "Operations", "michael.brown@pixell-river.com", 2045550187, 3),
        employee(7, "Patricia Taylor", "Operations Manager", "Operations", "patricia.taylor@pixell-river.com", 2045550204, 3),
        employee(8, "Chen Wei", "Senior Loan Officer", "Loans", "chen.wei@pixell-river.com", 2045550218, 5),
        employee(9, "Charles Thomas", "Accountant", "Finance", "charles.thomas@pixell-river.com", 2045550225, 5),
        employee(10, "Elizabeth Jackson", "Marketing Specialist", "Marketing", "elizabeth.jackson@pixell-river.com", 2045550237, 6),
        employee(11, "Christopher White", "IT Manager", "IT", "christopher.white@pixell-river.com", 6045550244, 1),
        employee(12, "Jennifer Harris", "Branch Manager", "Management", "jennifer.harris@pixell-river.com", 2045550252, 6),
        employee(13, "William Martin", "Customer Service Representative", "Customer Service", "william.martin@pixell-river.com", 4165550260, 8),
        employee(14, "Sarah King", "Customer Service Supervisor", "Customer Service", "sarah.king@pixell-river.com", 5065550336, 9),
    ]
}
