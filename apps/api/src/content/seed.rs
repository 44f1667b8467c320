//! Sample catalog served when no database is configured.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::catalog::{
    BlogPost, Course, CourseInstructor, CourseLesson, LeaderboardEntry, PostAuthor, Project,
};

fn s(v: &str) -> String {
    v.to_string()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|v| v.to_string()).collect()
}

fn day(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single()
}

fn lessons(items: &[(&str, &str)]) -> Option<Vec<CourseLesson>> {
    Some(
        items
            .iter()
            .map(|(title, duration)| CourseLesson {
                title: s(title),
                duration: s(duration),
            })
            .collect(),
    )
}

pub fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: s("1"),
            slug: s("getting-started-with-nextjs-14"),
            title: s("Getting Started with Next.js 14"),
            summary: s("A comprehensive guide to setting up your first Next.js 14 project with App Router."),
            image_url: s("https://picsum.photos/seed/blog1/1200/600"),
            author: PostAuthor {
                name: s("Admin User"),
                avatar_url: s("https://picsum.photos/seed/admin/40/40"),
            },
            published_at: day(2024, 7, 20),
            tags: list(&["Next.js", "Web Development", "JavaScript"]),
            content: Some(s("<p>Installation, project structure, layouts and pages with the App Router, \
                and data fetching with Server Components.</p>")),
        },
        BlogPost {
            id: s("2"),
            slug: s("mastering-tailwind-css-techniques"),
            title: s("Mastering Tailwind CSS: Advanced Techniques"),
            summary: s("Unlock the full potential of Tailwind CSS with these advanced tips and tricks."),
            image_url: s("https://picsum.photos/seed/blog2/1200/600"),
            author: PostAuthor {
                name: s("Community Writer"),
                avatar_url: s("https://picsum.photos/seed/writer1/40/40"),
            },
            published_at: day(2024, 7, 18),
            tags: list(&["TailwindCSS", "CSS", "Frontend"]),
            content: Some(s("<p>Custom variants, design tokens, and keeping utility classes readable.</p>")),
        },
        BlogPost {
            id: s("3"),
            slug: s("ai-in-modern-web-design"),
            title: s("The Role of AI in Modern Web Design"),
            summary: s("Explore how artificial intelligence is shaping the future of web design and user experience."),
            image_url: s("https://picsum.photos/seed/blog3/1200/600"),
            author: PostAuthor {
                name: s("AI Enthusiast"),
                avatar_url: s("https://picsum.photos/seed/aiuser/40/40"),
            },
            published_at: day(2024, 7, 15),
            tags: list(&["AI", "Web Design", "UX"]),
            content: Some(s("<p>Generated layouts, personalised content, and where designers stay in the loop.</p>")),
        },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: s("1"),
            title: s("Advanced Web Development Bootcamp"),
            description: s("Master modern web technologies including React, Node.js, and GraphQL."),
            image_url: s("https://picsum.photos/seed/course1/600/300"),
            author_name: s("Jane Doe"),
            instructor: Some(CourseInstructor {
                name: s("Jane Doe"),
                bio: s("Lead Engineer at TechCorp, 10+ years experience."),
                avatar_url: s("https://picsum.photos/seed/instructor1/100/100"),
            }),
            rating: Some(4.8),
            student_count: Some(1250),
            price: s("$99"),
            category: s("Web Development"),
            level: s("Advanced"),
            duration: Some(s("12 Weeks")),
            lessons: lessons(&[
                ("Introduction to Web Dev", "30m"),
                ("React Fundamentals", "2h"),
                ("Advanced State Management with Redux", "3h"),
            ]),
        },
        Course {
            id: s("2"),
            title: s("Introduction to Machine Learning"),
            description: s("Learn the fundamentals of machine learning and AI with Python."),
            image_url: s("https://picsum.photos/seed/course2/600/300"),
            author_name: s("John Smith"),
            instructor: Some(CourseInstructor {
                name: s("John Smith"),
                bio: s("Data Scientist at AI Innovations, PhD in CS."),
                avatar_url: s("https://picsum.photos/seed/instructor2/100/100"),
            }),
            rating: Some(4.9),
            student_count: Some(3400),
            price: s("Free"),
            category: s("Data Science"),
            level: s("Beginner"),
            duration: Some(s("8 Weeks")),
            lessons: lessons(&[
                ("What is Machine Learning?", "45m"),
                ("Python for Machine Learning", "2h 30m"),
            ]),
        },
        Course {
            id: s("3"),
            title: s("UI/UX Design Masterclass"),
            description: s("Create stunning user interfaces and experiences from scratch."),
            image_url: s("https://picsum.photos/seed/course3/600/300"),
            author_name: s("Alice Brown"),
            instructor: Some(CourseInstructor {
                name: s("Alice Brown"),
                bio: s("Award-winning designer with a passion for user-centric products."),
                avatar_url: s("https://picsum.photos/seed/instructor3/100/100"),
            }),
            rating: Some(4.7),
            student_count: Some(800),
            price: s("$49"),
            category: s("Design"),
            level: s("Intermediate"),
            duration: Some(s("10 Weeks")),
            lessons: lessons(&[
                ("Design Principles", "1h"),
                ("User Research", "2h"),
                ("Prototyping in Figma", "3h"),
            ]),
        },
        Course {
            id: s("4"),
            title: s("Cybersecurity Essentials"),
            description: s("Protect systems and data from cyber threats. Learn ethical hacking."),
            image_url: s("https://picsum.photos/seed/course4/600/300"),
            author_name: s("Bob Green"),
            instructor: Some(CourseInstructor {
                name: s("Bob Green"),
                bio: s("Cybersecurity expert with experience in ethical hacking and defense."),
                avatar_url: s("https://picsum.photos/seed/instructor4/100/100"),
            }),
            rating: Some(4.6),
            student_count: Some(1500),
            price: s("$79"),
            category: s("Cybersecurity"),
            level: s("Intermediate"),
            duration: Some(s("6 Weeks")),
            lessons: lessons(&[
                ("Intro to Cybersecurity", "1h"),
                ("Network Security", "2.5h"),
                ("Ethical Hacking Basics", "3h"),
            ]),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: s("1"),
            title: s("E-commerce Platform"),
            description: s("A full-featured e-commerce platform with modern UI."),
            long_description: Some(s("Product listings, authentication, a shopping cart, and an admin \
                panel for products and orders, built on a MERN stack.")),
            image_url: s("https://picsum.photos/seed/project1/600/400"),
            tags: list(&["React", "Node.js", "MongoDB"]),
            technologies: Some(list(&["React", "Redux", "Node.js", "Express.js", "MongoDB", "Stripe API"])),
            live_link: Some(s("#")),
            repo_link: Some(s("#")),
            date: day(2023, 5, 15),
        },
        Project {
            id: s("2"),
            title: s("Social Media App"),
            description: s("A social networking app for connecting people."),
            long_description: Some(s("Updates, a news feed, profiles, direct messaging, and real-time \
                notifications on a serverless stack.")),
            image_url: s("https://picsum.photos/seed/project2/600/400"),
            tags: list(&["Next.js", "Firebase", "TailwindCSS"]),
            technologies: Some(list(&["Next.js", "Firebase Auth", "Firestore", "Tailwind CSS", "Vercel"])),
            live_link: Some(s("#")),
            repo_link: Some(s("#")),
            date: day(2023, 8, 20),
        },
        Project {
            id: s("3"),
            title: s("Rust Catalog API"),
            description: s("A JSON API serving posts, courses and projects, written in Rust."),
            long_description: Some(s("Axum routes over a PostgreSQL catalog with an in-memory fallback.")),
            image_url: s("https://picsum.photos/seed/projectrust1/600/400"),
            tags: list(&["Rust", "API", "PostgreSQL"]),
            technologies: Some(list(&["Rust", "Axum", "SQLx", "PostgreSQL"])),
            live_link: None,
            repo_link: Some(s("#")),
            date: day(2024, 6, 1),
        },
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    let rows = [
        ("1", "Alice Wonderland", "user1", 10500, &["Top Contributor", "Community Helper"][..]),
        ("2", "Bob The Builder", "user2", 9800, &["Bug Squasher", "Early Adopter"][..]),
        ("3", "Charlie Brown", "user3", 9200, &["Forum Guru"][..]),
        ("4", "Diana Prince", "user4", 8500, &["Mentor", "Content Creator"][..]),
        ("5", "Edward Scissorhands", "user5", 7800, &["Top Learner"][..]),
    ];
    rows.iter()
        .zip(1..)
        .map(|((id, name, seed, points, achievements), rank)| LeaderboardEntry {
            id: s(id),
            rank,
            name: s(name),
            avatar_url: format!("https://picsum.photos/seed/{seed}/40/40"),
            points: *points,
            achievements: list(achievements),
        })
        .collect()
}
