//! Hand-curated header aliases.
//!
//! Keys are normalized header forms (see [`roster_model::normalize_name`]);
//! values are exact target column names. Lookup runs before any other
//! matching rule, so an entry here always wins.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use roster_model::TargetSchema;

const SYNONYMS: &[(&str, &str)] = &[
    // Name variants
    ("firstname", "First"),
    ("fname", "First"),
    ("givenname", "First"),
    ("lastname", "Last"),
    ("lname", "Last"),
    ("surname", "Last"),
    ("familyname", "Last"),
    ("middlename", "Middle"),
    ("middleinitial", "Middle"),
    ("nickname", "Preferred"),
    ("preferredname", "Preferred"),
    ("goesby", "Preferred"),
    ("spousename", "Spouse"),
    ("spousefirstname", "Spouse"),
    // Key/ID variants
    ("id", "PescadoreKey"),
    ("key", "PescadoreKey"),
    ("memberid", "PescadoreKey"),
    ("memberkey", "PescadoreKey"),
    ("pescadoreid", "PescadoreKey"),
    ("pescadorenumber", "PescadoreKey"),
    // Contact variants
    ("emailaddress", "Email"),
    ("homeemail", "Email"),
    ("phone", "Phone1"),
    ("phonenumber", "Phone1"),
    ("homephone", "Phone1"),
    ("primaryphone", "Phone1"),
    ("cell", "Phone2"),
    ("cellphone", "Phone2"),
    ("mobilephone", "Phone2"),
    ("secondaryphone", "Phone2"),
    // Address parts
    ("address", "Address1"),
    ("street", "Address1"),
    ("streetaddress", "Address1"),
    ("apt", "Address2"),
    ("unit", "Address2"),
    ("suite", "Address2"),
    ("town", "City"),
    ("province", "State"),
    ("zipcode", "Zip"),
    ("postalcode", "Zip"),
    ("postcode", "Zip"),
    // Church
    ("homechurch", "Church"),
    ("churchname", "Church"),
    ("congregation", "Church"),
    // Weekend labels
    ("weekendattended", "Weekend"),
    ("originalweekend", "Weekend"),
    ("tdweekend", "Weekend"),
    ("candidateweekend", "Weekend"),
    ("weekendno", "Weekend"),
    ("weekendnumber", "Weekend"),
    // Sponsor
    ("sponsorname", "Sponsor"),
    ("sponsoredby", "Sponsor"),
    // Flags
    ("activeflag", "Active"),
    ("isactive", "Active"),
    ("clergyflag", "Clergy"),
    ("isclergy", "Clergy"),
    ("pastor", "Clergy"),
    ("minister", "Clergy"),
    // Misc identity
    ("birthdate", "Birthday"),
    ("dob", "Birthday"),
    ("dateofbirth", "Birthday"),
    ("job", "Occupation"),
    ("profession", "Occupation"),
    // Role shorthands
    ("headcha", "Head"),
    ("asstheadcha", "Asst Head"),
    ("av", "Audio"),
    ("avteam", "Audio"),
    ("tablecha", "Table Leader"),
    // Short quantity convention (the long "<role> service qty" form is
    // handled by the pattern rules)
    ("kitchenqty", "Kitchen_Service_Qty"),
    ("diningqty", "Dining_Service_Qty"),
    ("chapelqty", "Chapel_Service_Qty"),
    ("dormqty", "Dorm_Service_Qty"),
    ("palancaqty", "Palanca_Service_Qty"),
    ("prayerqty", "Prayer_Service_Qty"),
    ("musicqty", "Music_Service_Qty"),
    ("tableleaderqty", "Table_Leader_Service_Qty"),
];

/// Normalized alias -> exact target column name.
pub fn synonym_table() -> &'static BTreeMap<&'static str, &'static str> {
    static TABLE: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYNONYMS.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_real_columns() {
        let schema = TargetSchema::global();
        for (alias, target) in synonym_table() {
            assert!(
                schema.contains(target),
                "alias {alias:?} points at unknown column {target:?}"
            );
        }
    }

    #[test]
    fn aliases_are_normalized() {
        for (alias, _) in synonym_table() {
            assert_eq!(
                *alias,
                roster_model::normalize_name(alias),
                "alias {alias:?} is not in normalized form"
            );
        }
    }
}
