use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A fixed set of answers for a select/radio input. `""` is the unanswered value.
pub trait Choice: Copy + PartialEq + Default + 'static {
    fn options() -> &'static [Self];
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;

    fn from_value(value: &str) -> Self {
        Self::options()
            .iter()
            .copied()
            .find(|o| o.value() == value)
            .unwrap_or_default()
    }
}

macro_rules! choice {
    ($name:ident { $($variant:ident => $value:literal, $label:literal;)+ }) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            #[serde(rename = "")]
            Unset,
            $(#[serde(rename = $value)] $variant,)+
        }

        impl Choice for $name {
            fn options() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn value(self) -> &'static str {
                match self {
                    $name::Unset => "",
                    $($name::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $name::Unset => "Select",
                    $($name::$variant => $label,)+
                }
            }
        }
    };
}

choice!(Gender {
    Male => "male", "Male";
    Female => "female", "Female";
    NonBinary => "non-binary", "Non-binary";
    PreferNot => "prefer-not", "Prefer not to say";
});

choice!(GraduationYear {
    Y2025 => "2025", "2025";
    Y2026 => "2026", "2026";
    Y2027 => "2027", "2027";
    Y2028 => "2028", "2028";
});

choice!(ParticipationMode {
    Solo => "solo", "Solo (Lone Wolf)";
    Team => "team", "Team (Squad)";
});

choice!(Track {
    Fintech => "fintech", "FinTech";
    AiMl => "ai-ml", "AI/ML";
    Blockchain => "blockchain", "Blockchain";
    Edtech => "edtech", "EdTech";
    Open => "open", "Open Innovation";
    Space => "space", "SpaceTech";
});

choice!(Skill {
    Frontend => "frontend", "Frontend Dev";
    Backend => "backend", "Backend Dev";
    Fullstack => "fullstack", "Full Stack";
    Designer => "designer", "Designer (UI/UX)";
    Mobile => "mobile", "Mobile Dev";
    Aiml => "aiml", "AI/ML Engineer";
});

choice!(AttendanceMode {
    Online => "online", "Online";
    Offline => "offline", "Offline (In-person)";
});

choice!(Dietary {
    Veg => "veg", "Veg";
    NonVeg => "non-veg", "Non-Veg";
    Jain => "jain", "Jain";
    Vegan => "vegan", "Vegan";
});

/// Team size including the leader. Stored as a JSON number, `""` when unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamSize {
    #[default]
    Unset,
    Two,
    Three,
    Four,
}

impl TeamSize {
    pub const OPTIONS: [TeamSize; 3] = [TeamSize::Two, TeamSize::Three, TeamSize::Four];

    pub fn members(self) -> usize {
        match self {
            TeamSize::Unset => 0,
            TeamSize::Two => 2,
            TeamSize::Three => 3,
            TeamSize::Four => 4,
        }
    }

    pub fn from_members(n: u64) -> Self {
        match n {
            2 => TeamSize::Two,
            3 => TeamSize::Three,
            4 => TeamSize::Four,
            _ => TeamSize::Unset,
        }
    }

    pub fn from_value(value: &str) -> Self {
        value.parse::<u64>().map_or(TeamSize::Unset, Self::from_members)
    }
}

impl Serialize for TeamSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TeamSize::Unset => serializer.serialize_str(""),
            size => serializer.serialize_u64(size.members() as u64),
        }
    }
}

impl<'de> Deserialize<'de> for TeamSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_u64().map_or(TeamSize::Unset, TeamSize::from_members),
            Value::String(s) => TeamSize::from_value(&s),
            _ => TeamSize::Unset,
        })
    }
}

pub const TECH_STACK: [&str; 9] = [
    "React", "Python", "Node.js", "Rust", "Solidity", "Flutter", "AWS", "Docker", "Figma",
];

fn default_team_member_emails() -> Vec<String> {
    vec![String::new(); 3]
}

/// The registration draft, in the field names the storage and the API use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    // Personal
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub whatsapp_same_as_phone: bool,
    pub gender: Gender,

    // Academic
    pub university: String,
    pub degree: String,
    pub graduation_year: GraduationYear,
    pub roll_id: String,
    pub college_id_filename: String,
    pub resume_filename: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,

    // Team
    pub participation_mode: ParticipationMode,
    pub team_name: String,
    pub team_size: TeamSize,
    pub team_member_emails: Vec<String>,

    // Domain
    pub preferred_track: Track,
    pub primary_skill: Skill,
    pub tech_stack: Vec<String>,
    pub has_idea: Option<bool>,

    // Logistics
    pub attendance_mode: AttendanceMode,
    pub city: String,
    pub dietary: Dietary,
    pub needs_accommodation: Option<bool>,

    // Agreements
    pub agree_terms: bool,
    pub agree_conduct: bool,
    pub consent_resume_share: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            whatsapp: String::new(),
            whatsapp_same_as_phone: false,
            gender: Gender::Unset,
            university: String::new(),
            degree: String::new(),
            graduation_year: GraduationYear::Unset,
            roll_id: String::new(),
            college_id_filename: String::new(),
            resume_filename: String::new(),
            linkedin: String::new(),
            github: String::new(),
            portfolio: String::new(),
            participation_mode: ParticipationMode::Unset,
            team_name: String::new(),
            team_size: TeamSize::Unset,
            team_member_emails: default_team_member_emails(),
            preferred_track: Track::Unset,
            primary_skill: Skill::Unset,
            tech_stack: Vec::new(),
            has_idea: None,
            attendance_mode: AttendanceMode::Unset,
            city: String::new(),
            dietary: Dietary::Unset,
            needs_accommodation: None,
            agree_terms: false,
            agree_conduct: false,
            consent_resume_share: false,
        }
    }
}

/// Wizard sections in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Guidelines,
    Personal,
    Academic,
    Team,
    Domain,
    Logistics,
    Submit,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Guidelines,
        Section::Personal,
        Section::Academic,
        Section::Team,
        Section::Domain,
        Section::Logistics,
        Section::Submit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Guidelines => "guidelines",
            Section::Personal => "personal",
            Section::Academic => "academic",
            Section::Team => "team",
            Section::Domain => "skills",
            Section::Logistics => "logistics",
            Section::Submit => "submit",
        }
    }

    /// Short name on the step rail.
    pub fn label(self) -> &'static str {
        match self {
            Section::Guidelines => "Guidelines",
            Section::Personal => "Personal",
            Section::Academic => "Academic",
            Section::Team => "Team",
            Section::Domain => "Domain",
            Section::Logistics => "Logistics",
            Section::Submit => "Submit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Guidelines => "Registration Guidelines",
            Section::Personal => "Personal Details",
            Section::Academic => "Academic & Professional",
            Section::Team => "Team Formation",
            Section::Domain => "Domain & Skills",
            Section::Logistics => "Logistics",
            Section::Submit => "Agreements & Submit",
        }
    }

    /// Draft keys saved and reverted together by this section's Save/Cancel.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Section::Guidelines => &[],
            Section::Personal => &[
                "fullName",
                "email",
                "phone",
                "whatsapp",
                "whatsappSameAsPhone",
                "gender",
            ],
            Section::Academic => &[
                "university",
                "degree",
                "graduationYear",
                "rollId",
                "collegeIdFilename",
                "resumeFilename",
                "linkedin",
                "github",
                "portfolio",
            ],
            Section::Team => &["participationMode", "teamName", "teamSize", "teamMemberEmails"],
            Section::Domain => &["preferredTrack", "primarySkill", "techStack", "hasIdea"],
            Section::Logistics => &["attendanceMode", "city", "dietary", "needsAccommodation"],
            Section::Submit => &["agreeTerms", "agreeConduct", "consentResumeShare"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingFullName,
    MissingEmail,
    InvalidEmail,
    MissingPhone,
    TermsNotAccepted,
    ConductNotAccepted,
    CaptchaMissing,
}

impl ValidationIssue {
    pub fn message(self) -> &'static str {
        match self {
            ValidationIssue::MissingFullName => "Full name is required.",
            ValidationIssue::MissingEmail => "Email address is required.",
            ValidationIssue::InvalidEmail => "Email address does not look valid.",
            ValidationIssue::MissingPhone => "Phone number is required.",
            ValidationIssue::TermsNotAccepted => "Please accept the Terms & Conditions.",
            ValidationIssue::ConductNotAccepted => "Please accept the Code of Conduct.",
            ValidationIssue::CaptchaMissing => "Please complete the captcha.",
        }
    }

    /// Where the user has to go to fix it.
    pub fn section(self) -> Section {
        match self {
            ValidationIssue::MissingFullName
            | ValidationIssue::MissingEmail
            | ValidationIssue::InvalidEmail
            | ValidationIssue::MissingPhone => Section::Personal,
            ValidationIssue::TermsNotAccepted
            | ValidationIssue::ConductNotAccepted
            | ValidationIssue::CaptchaMissing => Section::Submit,
        }
    }
}

pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl RegistrationForm {
    /// Builds a draft from whatever was saved. Unknown keys are ignored and a
    /// value of the wrong shape falls back to that field's default.
    pub fn from_saved(saved: &Map<String, Value>) -> Self {
        let mut merged = Self::default().to_map();
        for (key, value) in saved {
            if !merged.contains_key(key) {
                continue;
            }
            let mut candidate = merged.clone();
            candidate.insert(key.clone(), value.clone());
            if serde_json::from_value::<Self>(Value::Object(candidate)).is_ok() {
                merged.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(Value::Object(merged)).unwrap_or_default()
    }

    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// The fields owned by `section`, ready to be merged into storage.
    pub fn section_patch(&self, section: Section) -> Map<String, Value> {
        let mut all = self.to_map();
        section
            .fields()
            .iter()
            .filter_map(|key| all.remove_entry(*key))
            .collect()
    }

    /// Puts the section's fields back to their last saved value, or to the
    /// default when that field was never saved.
    pub fn revert_section(&mut self, section: Section, snapshot: &Map<String, Value>) {
        let defaults = Self::default().to_map();
        let mut current = self.to_map();
        for key in section.fields() {
            let value = snapshot
                .get(*key)
                .or_else(|| defaults.get(*key))
                .cloned()
                .unwrap_or(Value::Null);
            current.insert((*key).to_string(), value);
        }
        *self = Self::from_saved(&current);
    }

    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
        if self.whatsapp_same_as_phone {
            self.whatsapp = self.phone.clone();
        }
    }

    pub fn set_whatsapp_same_as_phone(&mut self, same: bool) {
        self.whatsapp_same_as_phone = same;
        if same {
            self.whatsapp = self.phone.clone();
        }
    }

    /// Leaving team mode drops the squad details.
    pub fn set_participation_mode(&mut self, mode: ParticipationMode) {
        self.participation_mode = mode;
        if mode == ParticipationMode::Solo {
            let defaults = Self::default();
            self.team_name = defaults.team_name;
            self.team_size = defaults.team_size;
            self.team_member_emails = defaults.team_member_emails;
        }
        self.clamp_team_member_emails();
    }

    pub fn set_team_size(&mut self, size: TeamSize) {
        self.team_size = size;
        self.clamp_team_member_emails();
    }

    pub fn set_team_member_email(&mut self, index: usize, email: String) {
        if let Some(slot) = self.team_member_emails.get_mut(index) {
            *slot = email;
        }
    }

    /// One email input per member besides the leader.
    fn clamp_team_member_emails(&mut self) {
        if self.participation_mode != ParticipationMode::Team {
            return;
        }
        let count = self.team_size.members().saturating_sub(1);
        self.team_member_emails.resize(count, String::new());
    }

    pub fn toggle_tech(&mut self, label: &str) {
        if let Some(pos) = self.tech_stack.iter().position(|t| t == label) {
            self.tech_stack.remove(pos);
        } else {
            self.tech_stack.push(label.to_string());
        }
    }

    pub fn validate_for_submit(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.full_name.trim().is_empty() {
            issues.push(ValidationIssue::MissingFullName);
        }
        if self.email.trim().is_empty() {
            issues.push(ValidationIssue::MissingEmail);
        } else if !looks_like_email(&self.email) {
            issues.push(ValidationIssue::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            issues.push(ValidationIssue::MissingPhone);
        }
        if !self.agree_terms {
            issues.push(ValidationIssue::TermsNotAccepted);
        }
        if !self.agree_conduct {
            issues.push(ValidationIssue::ConductNotAccepted);
        }
        issues
    }
}

/// Body of `POST /api/register`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest<'a> {
    #[serde(flatten)]
    pub form: &'a RegistrationForm,
    pub captcha_token: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn saved(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn default_serializes_like_an_empty_draft() {
        let map = RegistrationForm::default().to_map();
        assert_eq!(map["fullName"], json!(""));
        assert_eq!(map["teamSize"], json!(""));
        assert_eq!(map["teamMemberEmails"], json!(["", "", ""]));
        assert_eq!(map["hasIdea"], Value::Null);
        assert_eq!(map["gender"], json!(""));
        assert_eq!(map["agreeTerms"], json!(false));
    }

    #[test]
    fn from_saved_fills_missing_fields() {
        let form = RegistrationForm::from_saved(&saved(json!({
            "fullName": "Ada",
            "teamSize": 3,
            "preferredTrack": "ai-ml",
            "hasIdea": true,
        })));

        assert_eq!(form.full_name, "Ada");
        assert_eq!(form.team_size, TeamSize::Three);
        assert_eq!(form.preferred_track, Track::AiMl);
        assert_eq!(form.has_idea, Some(true));
        assert_eq!(form.email, "");
        assert_eq!(form.team_member_emails.len(), 3);
    }

    #[test]
    fn from_saved_drops_only_bad_fields() {
        let form = RegistrationForm::from_saved(&saved(json!({
            "fullName": "Ada",
            "agreeTerms": "yes",
            "dietary": "carnivore",
            "somethingElse": 12,
        })));

        assert_eq!(form.full_name, "Ada");
        assert!(!form.agree_terms);
        assert_eq!(form.dietary, Dietary::Unset);
    }

    #[test]
    fn team_size_accepts_numbers_and_strings() {
        let form = RegistrationForm::from_saved(&saved(json!({"teamSize": "4"})));
        assert_eq!(form.team_size, TeamSize::Four);

        let form = RegistrationForm::from_saved(&saved(json!({"teamSize": 9})));
        assert_eq!(form.team_size, TeamSize::Unset);
    }

    #[test]
    fn section_patch_contains_exactly_the_section_fields() {
        let mut form = RegistrationForm::default();
        form.city = "Amethi".into();
        form.full_name = "Ada".into();

        let patch = form.section_patch(Section::Logistics);
        let keys: Vec<&str> = patch.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&"city"));
        assert!(!keys.contains(&"fullName"));
        assert_eq!(patch["city"], json!("Amethi"));

        assert!(form.section_patch(Section::Guidelines).is_empty());
    }

    #[test]
    fn every_field_belongs_to_one_section() {
        let all_keys = RegistrationForm::default().to_map();
        let mut owned: Vec<&str> = Section::ALL.iter().flat_map(|s| s.fields().iter().copied()).collect();
        owned.sort_unstable();
        let before = owned.len();
        owned.dedup();
        assert_eq!(before, owned.len());
        assert_eq!(owned.len(), all_keys.len());
        for key in owned {
            assert!(all_keys.contains_key(key), "{key} is not a draft field");
        }
    }

    #[test]
    fn revert_uses_snapshot_then_default() {
        let mut form = RegistrationForm::default();
        form.full_name = "Edited".into();
        form.email = "edited@example.com".into();
        form.city = "Kazan".into();

        let snapshot = saved(json!({"fullName": "Saved Name"}));
        form.revert_section(Section::Personal, &snapshot);

        assert_eq!(form.full_name, "Saved Name");
        assert_eq!(form.email, "");
        assert_eq!(form.city, "Kazan");
    }

    #[test]
    fn whatsapp_follows_phone_while_toggled() {
        let mut form = RegistrationForm::default();
        form.set_phone("+7 900 000 00 00".into());
        form.set_whatsapp_same_as_phone(true);
        assert_eq!(form.whatsapp, "+7 900 000 00 00");

        form.set_phone("+91 98765 43210".into());
        assert_eq!(form.whatsapp, "+91 98765 43210");

        form.set_whatsapp_same_as_phone(false);
        form.set_phone("+91 11111 11111".into());
        assert_eq!(form.whatsapp, "+91 98765 43210");
    }

    #[test]
    fn team_emails_follow_team_size() {
        let mut form = RegistrationForm::default();
        form.set_participation_mode(ParticipationMode::Team);
        assert!(form.team_member_emails.is_empty());

        form.set_team_size(TeamSize::Four);
        assert_eq!(form.team_member_emails, vec!["", "", ""]);

        form.set_team_member_email(0, "b@example.com".into());
        form.set_team_size(TeamSize::Two);
        assert_eq!(form.team_member_emails, vec!["b@example.com"]);

        form.set_team_member_email(5, "ignored@example.com".into());
        assert_eq!(form.team_member_emails.len(), 1);
    }

    #[test]
    fn switching_to_solo_clears_the_team() {
        let mut form = RegistrationForm::default();
        form.set_participation_mode(ParticipationMode::Team);
        form.team_name = "Squad".into();
        form.set_team_size(TeamSize::Three);
        form.set_team_member_email(0, "b@example.com".into());

        form.set_participation_mode(ParticipationMode::Solo);

        let defaults = RegistrationForm::default();
        assert_eq!(form.team_name, "");
        assert_eq!(form.team_size, TeamSize::Unset);
        assert_eq!(form.team_member_emails, defaults.team_member_emails);
        assert_eq!(form.section_patch(Section::Team)["teamName"], json!(""));
    }

    #[test]
    fn toggle_tech_adds_and_removes() {
        let mut form = RegistrationForm::default();
        form.toggle_tech("Rust");
        form.toggle_tech("Figma");
        form.toggle_tech("Rust");
        assert_eq!(form.tech_stack, vec!["Figma".to_string()]);
    }

    #[test]
    fn validation_lists_every_issue() {
        let issues = RegistrationForm::default().validate_for_submit();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingFullName,
                ValidationIssue::MissingEmail,
                ValidationIssue::MissingPhone,
                ValidationIssue::TermsNotAccepted,
                ValidationIssue::ConductNotAccepted,
            ]
        );

        let mut form = RegistrationForm::default();
        form.full_name = "Ada".into();
        form.email = "not-an-email".into();
        form.phone = "123".into();
        form.agree_terms = true;
        form.agree_conduct = true;
        assert_eq!(form.validate_for_submit(), vec![ValidationIssue::InvalidEmail]);

        form.email = "ada@example.com".into();
        assert!(form.validate_for_submit().is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("ada@example.com"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@@example.com"));
        assert!(!looks_like_email("a da@example.com"));
    }

    #[test]
    fn submit_request_flattens_form() {
        let mut form = RegistrationForm::default();
        form.full_name = "Ada".into();
        let body = serde_json::to_value(SubmitRequest {
            form: &form,
            captcha_token: "tok".into(),
        })
        .unwrap();

        assert_eq!(body["fullName"], json!("Ada"));
        assert_eq!(body["captchaToken"], json!("tok"));
    }

    #[test]
    fn choices_round_trip_through_select_values() {
        assert_eq!(Skill::from_value("designer"), Skill::Designer);
        assert_eq!(Skill::from_value("astronaut"), Skill::Unset);
        assert_eq!(Track::Space.label(), "SpaceTech");
        assert_eq!(Gender::options().len(), 4);
    }
}
