pub mod m202607210001_create_users;
pub mod m202607210002_create_students;
pub mod m202607210003_create_leave_requests;
