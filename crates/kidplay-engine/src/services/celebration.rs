use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which mini-game a tips/message request is about. Maps to the prompt
/// template on the host side; the engine only routes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Dental,
    Toys,
    Plants,
    Obstacle,
    BallToss,
    RolePlay,
}

/// One short educational tip shown on the finished screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub content: String,
}

impl Tip {
    fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Parse the service's structured payload: a JSON array of
    /// `{title, content}` objects.
    pub fn parse_list(json: &str) -> Result<Vec<Tip>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Error)]
pub enum CelebrationError {
    #[error("celebration service unavailable: {0}")]
    Unavailable(String),
    #[error("malformed tips payload: {0}")]
    BadPayload(#[from] serde_json::Error),
}

/// Tags a request with the session that issued it, so a reply that arrives
/// after a restart can be recognized as stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub u32);

/// A resolved (or failed) response from the celebration service.
#[derive(Debug)]
pub enum CelebrationReply {
    Tips(RequestId, Result<Vec<Tip>, CelebrationError>),
    Message(RequestId, Result<String, CelebrationError>),
}

/// The external AI text collaborator, seen through a request/poll seam that
/// fits a single-threaded tick loop: the session fires both requests on the
/// finished transition and polls for replies each tick. Implementations
/// bridge to whatever async machinery the host has.
pub trait CelebrationService {
    fn request_tips(&mut self, req: RequestId, topic: Topic);
    fn request_message(&mut self, req: RequestId, player: &str, topic: Topic);
    /// Drain every reply that has resolved since the last poll.
    fn poll(&mut self) -> Vec<CelebrationReply>;
}

/// Service implementation that answers immediately from the built-in
/// fallback texts. Used when the host has no AI backend configured; also
/// keeps the finished screen populated in demos and tests.
#[derive(Debug, Default)]
pub struct OfflineCelebration {
    pending: Vec<CelebrationReply>,
}

impl OfflineCelebration {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CelebrationService for OfflineCelebration {
    fn request_tips(&mut self, req: RequestId, topic: Topic) {
        self.pending
            .push(CelebrationReply::Tips(req, Ok(fallback_tips(topic))));
    }

    fn request_message(&mut self, req: RequestId, player: &str, topic: Topic) {
        self.pending.push(CelebrationReply::Message(
            req,
            Ok(fallback_message(player, topic)),
        ));
    }

    fn poll(&mut self) -> Vec<CelebrationReply> {
        std::mem::take(&mut self.pending)
    }
}

/// Built-in tips per topic, substituted whenever the service fails.
/// A child-facing game never shows a technical error state.
pub fn fallback_tips(topic: Topic) -> Vec<Tip> {
    match topic {
        Topic::Dental => vec![
            Tip::new("Brush twice a day", "Once in the morning and once before bed!"),
            Tip::new("Brush everywhere", "The outside, the inside, and the chewing side too."),
            Tip::new("Go easy on sweets", "The sugar bugs love candy a little too much!"),
        ],
        Topic::Toys => vec![
            Tip::new("Toys want to go home", "After playing, carry them back to their box to rest."),
            Tip::new("Tidy room, happy kid", "A neat room makes toys easy to find next time."),
            Tip::new("A big help", "Tidying up by yourself is a huge help to mom and dad!"),
        ],
        Topic::Plants => vec![
            Tip::new("Plants get thirsty", "Don't forget to water them so they never dry out!"),
            Tip::new("Little green lungs", "Plants freshen the air you breathe every day."),
            Tip::new("Be gentle", "No picking leaves or snapping stems, keep plants pretty!"),
        ],
        Topic::Obstacle => vec![
            Tip::new("Look before you leap", "Spot the obstacle first, then find your way around it."),
            Tip::new("One step at a time", "Slow and steady gets you safely to the finish line."),
            Tip::new("Keep trying", "If a path doesn't work, try another one!"),
        ],
        Topic::BallToss => vec![
            Tip::new("Aim first", "Look at the basket before you throw."),
            Tip::new("Practice makes perfect", "Every throw teaches your hands a little more."),
            Tip::new("Cheer for yourself", "A miss is just a warm-up for the next great shot!"),
        ],
        Topic::RolePlay => vec![
            Tip::new("Helpers are heroes", "Doctors, chefs and cashiers all help people every day."),
            Tip::new("Finish the job", "Doing every step carefully makes work turn out great."),
            Tip::new("Dream big", "You can try every job you like when you play pretend!"),
        ],
    }
}

/// Built-in congratulatory message, substituted whenever the service fails.
pub fn fallback_message(player: &str, topic: Topic) -> String {
    let feat = match topic {
        Topic::Dental => "brushed those teeth sparkling clean",
        Topic::Toys => "tidied every single toy away",
        Topic::Plants => "helped the little plant bloom",
        Topic::Obstacle => "raced all the way to the finish",
        Topic::BallToss => "threw like a true champion",
        Topic::RolePlay => "did a grown-up job all by yourself",
    };
    format!("Hooray {player}! You {feat}. What a wonderful kid! \u{2728}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tips_payload() {
        let json = r#"[
            { "title": "Brush twice", "content": "Morning and night." },
            { "title": "Less candy", "content": "Sugar bugs love it." }
        ]"#;
        let tips = Tip::parse_list(json).unwrap();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].title, "Brush twice");
        assert_eq!(tips[1].content, "Sugar bugs love it.");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = Tip::parse_list("not json").unwrap_err();
        let wrapped = CelebrationError::from(err);
        assert!(matches!(wrapped, CelebrationError::BadPayload(_)));
    }

    #[test]
    fn fallbacks_are_never_empty() {
        for topic in [
            Topic::Dental,
            Topic::Toys,
            Topic::Plants,
            Topic::Obstacle,
            Topic::BallToss,
            Topic::RolePlay,
        ] {
            assert_eq!(fallback_tips(topic).len(), 3);
            assert!(!fallback_message("Mai", topic).is_empty());
        }
    }

    #[test]
    fn offline_service_replies_on_next_poll() {
        let mut svc = OfflineCelebration::new();
        svc.request_tips(RequestId(1), Topic::Dental);
        svc.request_message(RequestId(1), "Mai", Topic::Dental);
        let replies = svc.poll();
        assert_eq!(replies.len(), 2);
        assert!(svc.poll().is_empty());
    }
}
