// 示例花名册数据

use crate::modules::directory::domain::{Counterpart, CounterpartId, CounterpartProfile, Presence};

pub fn sample_roster() -> Vec<Counterpart> {
    vec![
        Counterpart::new(
            "1",
            "Sarah Johnson",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&auto=format&fit=crop&q=80",
            Presence::Online,
        ),
        Counterpart::new(
            "2",
            "Michael Thompson",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&auto=format&fit=crop&q=80",
            Presence::Away,
        ),
        Counterpart::new(
            "3",
            "Jessica Williams",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&auto=format&fit=crop&q=80",
            Presence::Online,
        ),
        Counterpart::new(
            "4",
            "David Chen",
            "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?w=150&h=150&auto=format&fit=crop&q=80",
            Presence::Offline,
        ),
        Counterpart::new(
            "5",
            "Amanda Miller",
            "https://images.unsplash.com/photo-1517841905240-472988babdf9?w=150&h=150&auto=format&fit=crop&q=80",
            Presence::Online,
        ),
    ]
}

fn profile(email: &str, phone: &str, location: &str, title: &str, bio: &str) -> CounterpartProfile {
    CounterpartProfile {
        email: email.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        title: title.to_string(),
        bio: bio.to_string(),
    }
}

pub fn sample_profiles() -> Vec<(CounterpartId, CounterpartProfile)> {
    vec![
        (
            "1".into(),
            profile(
                "sarah.j@example.com",
                "+1 (555) 123-4567",
                "New York, USA",
                "UI/UX Designer",
                "Creative designer with 5+ years of experience in creating user-centered digital experiences.",
            ),
        ),
        (
            "2".into(),
            profile(
                "michael.t@example.com",
                "+1 (555) 987-6543",
                "San Francisco, USA",
                "Project Manager",
                "Experienced project manager specialized in agile methodologies and team leadership.",
            ),
        ),
        (
            "3".into(),
            profile(
                "jessica.w@example.com",
                "+1 (555) 456-7890",
                "Chicago, USA",
                "Marketing Specialist",
                "Digital marketing expert with a passion for data-driven strategies and creative campaigns.",
            ),
        ),
        (
            "4".into(),
            profile(
                "david.c@example.com",
                "+1 (555) 789-0123",
                "Austin, USA",
                "Software Developer",
                "Full-stack developer with expertise in React, Node.js, and cloud architecture.",
            ),
        ),
        (
            "5".into(),
            profile(
                "amanda.m@example.com",
                "+1 (555) 234-5678",
                "Seattle, USA",
                "Content Strategist",
                "Content creator focused on developing engaging digital narratives and brand stories.",
            ),
        ),
    ]
}
