//! Demo data seeded into every fresh session.

use crate::records::{
    Event, EventId, Notification, NotificationId, NotificationKind, Post, PostId,
};

/// Picture attached to posts composed during the session.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1494976688141-f377b5e1e5d2?w=400&h=300&fit:crop";

/// The three feed posts every session starts with.
pub fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId::new(1),
            author: "ChrisHemsworth00".to_string(),
            content: "Just cleaned the whip. Looking fresh for the Sunday meet.".to_string(),
            likes: 24,
            comments: 8,
            image: "https://images.unsplash.com/photo-1686914687902-e58579225e84?q=80&w=1740&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D".to_string(),
        },
        Post {
            id: PostId::new(2),
            author: "TurboTim_95".to_string(),
            content: "New wheels finally came in! Can't wait to take her for a spin 🔥"
                .to_string(),
            likes: 42,
            comments: 15,
            image: "https://images.unsplash.com/photo-1745943375065-da7351159408?q=80&w=1964&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D".to_string(),
        },
        Post {
            id: PostId::new(3),
            author: "DriftKing2023".to_string(),
            content: "Track day was insane! Got some sick footage sliding around turn 3."
                .to_string(),
            likes: 67,
            comments: 23,
            image: "https://images.unsplash.com/photo-1696182664993-880238f55be6?q=80&w=1740&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D".to_string(),
        },
    ]
}

/// The three upcoming events every session starts with.
pub fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new(1),
            name: "Sunday Car Meet".to_string(),
            date: "2025-05-25".to_string(),
            location: "Central Park".to_string(),
            attendees: 45,
            description: "Weekly car enthusiast meetup".to_string(),
        },
        Event {
            id: EventId::new(2),
            name: "Track Day at Silverstone".to_string(),
            date: "2025-06-02".to_string(),
            location: "Silverstone Circuit".to_string(),
            attendees: 120,
            description: "Professional track day event".to_string(),
        },
        Event {
            id: EventId::new(3),
            name: "JDM Festival 2025".to_string(),
            date: "2025-06-15".to_string(),
            location: "Tokyo Drift Arena".to_string(),
            attendees: 300,
            description: "Celebrating Japanese car culture".to_string(),
        },
    ]
}

/// The three notifications every session starts with.
pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new(1),
            text: "BenDover liked your post".to_string(),
            time: "2h ago".to_string(),
            kind: NotificationKind::Like,
        },
        Notification {
            id: NotificationId::new(2),
            text: "New event: Sunday Car Meet".to_string(),
            time: "1d ago".to_string(),
            kind: NotificationKind::Event,
        },
        Notification {
            id: NotificationId::new(3),
            text: "You have 3 new followers".to_string(),
            time: "2d ago".to_string(),
            kind: NotificationKind::Follow,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_collections_have_three_entries_each() {
        assert_eq!(demo_posts().len(), 3);
        assert_eq!(demo_events().len(), 3);
        assert_eq!(demo_notifications().len(), 3);
    }

    #[test]
    fn seed_ids_are_unique() {
        let posts = demo_posts();
        let mut ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }
}
