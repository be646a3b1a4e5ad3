//! Naming conventions for type tables
//!
//! Type names are PascalCase; persistence names are lowercase_underscore.
//! Derivations here are deliberately simplistic and overridable at the
//! declaration site.

/// Convert a PascalCase type name to a lowercase_underscore field name.
///
/// `"Gender"` becomes `"gender"`, `"GenderRole"` becomes `"gender_role"`.
/// Runs of capitals stay one word, so `"HTTPStatus"` becomes
/// `"httpstatus"`.
pub fn type_name_to_field(name: &str) -> String {
    let mut field = String::with_capacity(name.len() + 4);
    let mut prev_upper = true;
    for c in name.chars() {
        if c.is_uppercase() {
            if !prev_upper {
                field.push('_');
            }
            field.extend(c.to_lowercase());
            prev_upper = true;
        } else {
            field.push(c);
            prev_upper = false;
        }
    }
    field
}

/// Derive the table name for a type table's value field.
///
/// Pluralization simply appends `s`. An explicit plural wins and is used
/// verbatim, so it should already be in lowercase_underscore form.
pub fn pluralize(field: &str, explicit: Option<&str>) -> String {
    match explicit {
        Some(plural) => plural.to_string(),
        None => format!("{field}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_name() {
        assert_eq!(type_name_to_field("Gender"), "gender");
    }

    #[test]
    fn test_multi_word_name() {
        assert_eq!(type_name_to_field("GenderRole"), "gender_role");
    }

    #[test]
    fn test_capital_run_stays_one_word() {
        assert_eq!(type_name_to_field("HTTPStatus"), "httpstatus");
    }

    #[test]
    fn test_already_lowercase_passes_through() {
        assert_eq!(type_name_to_field("gender"), "gender");
    }

    #[test]
    fn test_pluralize_appends_s() {
        assert_eq!(pluralize("gender", None), "genders");
    }

    #[test]
    fn test_explicit_plural_wins_verbatim() {
        assert_eq!(pluralize("category", Some("categories")), "categories");
    }
}
