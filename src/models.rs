//! Frontend Models
//!
//! Record shapes returned by the coaching API. The backend is loose about
//! types (ids and numbers arrive as strings, text fields as null), so
//! fields decode leniently and unknown fields are ignored.

use list_manager::Record;
use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

// ========================
// Lenient Decoders
// ========================

/// String, number, bool or null as a string; null becomes empty
pub fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Like [`lenient_string`], but null and blank become `None`
pub fn lenient_opt_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let text = lenient_string(de)?;
    Ok(Some(text).filter(|t| !t.trim().is_empty()))
}

fn u64_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn lenient_u64<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(de)?;
    u64_from_value(&value).ok_or_else(|| D::Error::custom(format!("invalid id {}", value)))
}

/// Numeric id that may be missing; unparsable values become 0
pub fn lenient_u64_or_zero<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
    Ok(u64_from_value(&Value::deserialize(de)?).unwrap_or(0))
}

/// Number or numeric string; anything else becomes 0
pub fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => crate::format::parse_percent(&s),
        _ => 0.0,
    })
}

// ========================
// Check-in Questions & Answers
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
    /// "active" or "inactive"
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl Record for Question {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionRef {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserRef {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
    #[serde(default, deserialize_with = "lenient_u64_or_zero")]
    pub question_id: u64,
    #[serde(default, deserialize_with = "lenient_u64_or_zero")]
    pub user_id: u64,
    #[serde(default)]
    pub question: Option<QuestionRef>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl Answer {
    pub fn question_text(&self) -> &str {
        self.question.as_ref().map_or("", |q| q.question.as_str())
    }

    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.first_name.as_str())
    }

    pub fn user_email(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.email.as_str())
    }
}

impl Record for Answer {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.answer.as_str(), self.question_text(), self.user_name()]
    }
}

/// Weekly answers are also searchable by the author's email
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAnswer(pub Answer);

impl Record for WeeklyAnswer {
    type Id = u64;

    fn id(&self) -> u64 {
        self.0.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.0.question_text(), self.0.answer.as_str(), self.0.user_name(), self.0.user_email()]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub feedback: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl Record for Rating {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.feedback.as_str()]
    }
}

// ========================
// Users
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Partner {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub my_partner_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub my_partner_mobile: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub my_partner_email: String,
    /// "husband" or "wife"
    #[serde(default, deserialize_with = "lenient_string")]
    pub partner: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

impl Partner {
    pub fn is_husband(&self) -> bool {
        self.partner.trim().eq_ignore_ascii_case("husband")
    }

    pub fn is_wife(&self) -> bool {
        self.partner.trim().eq_ignore_ascii_case("wife")
    }
}

impl Record for Partner {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.my_partner_name.as_str(),
            self.email.as_str(),
            self.mobile.as_str(),
            self.role.as_str(),
            self.partner.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub my_partner_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub my_partner_mobile: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

// ========================
// Recommendations
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub button_label: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub button_link: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl Record for Recommendation {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.subtitle.as_str()]
    }
}

// ========================
// Progress & Analytics
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressEntry {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub streak_days: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub points: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tier: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub progress_percent: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl Record for ProgressEntry {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.user_email.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderboardStats {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_score: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub streak_days: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub regional_avg: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub top_10_avg: String,
    #[serde(default)]
    pub leaderboard: Vec<LeaderEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScorePoint {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendPoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgressReport {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub value: f64,
}

/// Week-over-week change, e.g. "12%" or "Stable"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeekComparison {
    #[serde(default, deserialize_with = "lenient_string")]
    pub communication: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub trust: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub scores: Vec<ScorePoint>,
    #[serde(default)]
    pub trends: Vec<TrendPoint>,
    #[serde(default)]
    pub progress_reports: Vec<ProgressReport>,
    #[serde(default)]
    pub week_vs_last_week: WeekComparison,
}

impl AnalyticsReport {
    pub fn overall_score(&self) -> f64 {
        self.scores.first().map_or(0.0, |s| s.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_manager::search;

    #[test]
    fn test_question_with_string_id() {
        let q: Question = serde_json::from_str(r#"{"id":"4","question":"How was today?","status":"active","extra":1}"#).unwrap();
        assert_eq!(q.id, 4);
        assert_eq!(q.created_at, None);
        assert!(search::matches(&q, "TODAY"));
    }

    #[test]
    fn test_question_search_ignores_status() {
        let active = Question { id: 1, question: "How was today?".into(), status: "active".into(), created_at: None };
        let inactive = Question { id: 2, question: "What made you smile?".into(), status: "inactive".into(), created_at: None };
        assert!(!search::matches(&active, "active"));
        assert!(!search::matches(&inactive, "active"));
        assert!(search::matches(&inactive, "smile"));
    }

    #[test]
    fn test_answer_nested_refs() {
        let a: Answer = serde_json::from_str(
            r#"{"id":9,"answer":"We cooked","question_id":"2","user_id":5,
                "question":{"question":"Positive action?"},"user":{"first_name":"Ravi","email":null}}"#,
        )
        .unwrap();
        assert_eq!(a.question_text(), "Positive action?");
        assert_eq!(a.user_name(), "Ravi");
        assert_eq!(a.user_email(), "");
        assert!(search::matches(&a, "ravi"));
        assert!(search::matches(&a, "positive"));
    }

    #[test]
    fn test_only_weekly_answers_search_email() {
        let raw = r#"{"id":1,"answer":"ok","user":{"first_name":"Ann","email":"ann@mail.com"}}"#;
        let daily: Answer = serde_json::from_str(raw).unwrap();
        let weekly: WeeklyAnswer = serde_json::from_str(raw).unwrap();
        assert!(!search::matches(&daily, "mail.com"));
        assert!(search::matches(&weekly, "mail.com"));
    }

    #[test]
    fn test_answer_without_user_is_not_an_error() {
        let a: Answer = serde_json::from_str(r#"{"id":3,"answer":null,"user":null}"#).unwrap();
        assert_eq!(a.answer, "");
        assert_eq!(a.user_name(), "");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_str::<Question>(r#"{"question":"x"}"#).is_err());
        assert!(serde_json::from_str::<Question>(r#"{"id":"abc"}"#).is_err());
    }

    #[test]
    fn test_partner_roles() {
        let p: Partner = serde_json::from_str(r#"{"id":1,"first_name":"Sam","partner":"Husband","mobile":9876543210}"#).unwrap();
        assert!(p.is_husband());
        assert!(!p.is_wife());
        assert_eq!(p.mobile, "9876543210");
        assert!(search::matches(&p, "98765"));
    }

    #[test]
    fn test_analytics_report() {
        let report: AnalyticsReport = serde_json::from_str(
            r#"{"status":true,"scores":[{"value":"78"}],"trends":[{"date":"2024-05-01","score":61}],
                "progress_reports":[{"category":"Trust","value":40}],
                "week_vs_last_week":{"communication":"12%","trust":"Stable"}}"#,
        )
        .unwrap();
        assert_eq!(report.overall_score(), 78.0);
        assert_eq!(report.trends[0].score, 61.0);
        assert_eq!(report.week_vs_last_week.trust, "Stable");
    }

    #[test]
    fn test_leaderboard_defaults() {
        let stats: LeaderboardStats = serde_json::from_str(r#"{"user_score":88,"leaderboard":[{"name":"A","score":90}]}"#).unwrap();
        assert_eq!(stats.user_score, "88");
        assert_eq!(stats.level, "");
        assert_eq!(stats.leaderboard[0].score, "90");
    }
}
