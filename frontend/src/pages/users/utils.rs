use crate::api::{ManagedUser, NewUserRequest};

pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";
pub const DEFAULT_DEPARTMENT: &str = "General";
pub const USER_CREATED: &str = "User created successfully!";

/// Case-insensitive match on name, email, or department.
pub fn filter_users(users: &[ManagedUser], query: &str) -> Vec<ManagedUser> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|user| {
            [&user.name, &user.email, &user.department]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn build_new_user(
    name: &str,
    email: &str,
    department: &str,
) -> Result<NewUserRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(NAME_AND_EMAIL_REQUIRED);
    }
    let department = match department.trim() {
        "" => DEFAULT_DEPARTMENT,
        other => other,
    };
    Ok(NewUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    })
}

pub fn role_badge_class(role: &str) -> &'static str {
    match role.to_ascii_lowercase().as_str() {
        "admin" => "badge red",
        "auditor" => "badge yellow",
        _ => "badge blue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, department: &str) -> ManagedUser {
        ManagedUser {
            name: name.into(),
            email: email.into(),
            department: department.into(),
            ..Default::default()
        }
    }

    #[test]
    fn filter_matches_any_field_ignoring_case() {
        let users = vec![
            user("Sarah Johnson", "sarah@corp.io", "Finance"),
            user("Mike Chen", "mike@corp.io", "Engineering"),
        ];
        assert_eq!(filter_users(&users, "SARAH").len(), 1);
        assert_eq!(filter_users(&users, "engineer")[0].name, "Mike Chen");
        assert_eq!(filter_users(&users, "corp.io").len(), 2);
        assert!(filter_users(&users, "legal").is_empty());
    }

    #[test]
    fn blank_query_keeps_everyone() {
        let users = vec![user("A", "a@x", "Ops")];
        assert_eq!(filter_users(&users, "   "), users);
    }

    #[test]
    fn new_user_requires_name_and_email() {
        assert_eq!(build_new_user("", "a@b.c", ""), Err(NAME_AND_EMAIL_REQUIRED));
        assert_eq!(build_new_user("Ann", "  ", "Ops"), Err(NAME_AND_EMAIL_REQUIRED));
    }

    #[test]
    fn department_defaults_to_general() {
        let request = build_new_user(" Ann ", "ann@corp.io", "").unwrap();
        assert_eq!(request.name, "Ann");
        assert_eq!(request.department, "General");
        let request = build_new_user("Ann", "ann@corp.io", "Legal").unwrap();
        assert_eq!(request.department, "Legal");
    }

    #[test]
    fn role_badges() {
        assert_eq!(role_badge_class("Admin"), "badge red");
        assert_eq!(role_badge_class("Auditor"), "badge yellow");
        assert_eq!(role_badge_class("User"), "badge blue");
    }
}
