//! The canned portfolio tree served by the demo shell.
//!
//! Mirrors the original static table: topic directories under the root plus
//! a `resume.txt`, each directory holding short text files. The `projects`
//! directory lists live-mounted entries whose contents come from the
//! project-store collaborator, not from this table.

use super::VirtualFs;

impl VirtualFs {
    /// Build the demo portfolio filesystem.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn portfolio() -> Self {
        Self::new()
            .with_directory(
                "~",
                &["about", "skills", "experience", "projects", "contact", "resume.txt"],
            )
            .with_file(
                "~/resume.txt",
                &[
                    "ALEX RIVERS",
                    "Network Software Engineer",
                    "==========================================",
                    "",
                    "Contact: alex@rivers.dev",
                    "GitHub:  github.com/arivers",
                    "",
                    "Education: B.Tech Computer Science",
                    "Current:   Network tooling, enterprise backbone team",
                    "Certs:     CCNA, Cloud Practitioner",
                    "",
                    "Use 'cd <directory>' to explore different sections",
                    "Use 'ls' to list directory contents",
                    "Use 'cat <file>' to view file contents",
                ],
            )
            .with_directory(
                "~/about",
                &["whoami.txt", "education.txt", "certifications.txt", "mission.txt"],
            )
            .with_file(
                "~/about/whoami.txt",
                &[
                    "$ whoami",
                    "arivers",
                    "",
                    "Role: Network Software Engineer",
                    "Focus: routing, automation, observability",
                    "",
                    "Builds tools that keep large networks honest.",
                ],
            )
            .with_file(
                "~/about/education.txt",
                &[
                    "EDUCATION",
                    "=========",
                    "",
                    "B.Tech, Computer Science (2019-2023)",
                    "",
                    "Coursework:",
                    "- Data Structures & Algorithms",
                    "- Computer Networks",
                    "- Database Systems",
                    "- Distributed Systems",
                ],
            )
            .with_file(
                "~/about/certifications.txt",
                &[
                    "CERTIFICATIONS",
                    "==============",
                    "",
                    "CCNA (Cisco Certified Network Associate)",
                    "  Status: active",
                    "",
                    "AWS Cloud Practitioner",
                    "  Status: active",
                ],
            )
            .with_file(
                "~/about/mission.txt",
                &[
                    "MISSION",
                    "=======",
                    "",
                    "Make network operations boring: automated, observable,",
                    "and reproducible. Prefer small tools that compose.",
                ],
            )
            .with_directory(
                "~/skills",
                &["programming.txt", "frameworks.txt", "tools.txt", "databases.txt"],
            )
            .with_file(
                "~/skills/programming.txt",
                &[
                    "PROGRAMMING LANGUAGES",
                    "=====================",
                    "",
                    "Rust      - network daemons, CLI tooling",
                    "Python    - automation, data wrangling",
                    "Go        - control-plane services",
                    "TypeScript - dashboards and internal UIs",
                ],
            )
            .with_file(
                "~/skills/frameworks.txt",
                &[
                    "FRAMEWORKS & LIBRARIES",
                    "======================",
                    "",
                    "Backend: axum, Flask, gRPC",
                    "Frontend: React, Next.js",
                    "Infra: Terraform, Ansible",
                ],
            )
            .with_file(
                "~/skills/tools.txt",
                &[
                    "DEVELOPMENT TOOLS",
                    "=================",
                    "",
                    "Git, Docker, Wireshark, tcpdump,",
                    "iproute2, perf, and a well-worn tmux config.",
                ],
            )
            .with_file(
                "~/skills/databases.txt",
                &[
                    "DATABASES",
                    "=========",
                    "",
                    "PostgreSQL - system of record",
                    "SQLite     - embedded and test fixtures",
                    "Redis      - caching, queues",
                ],
            )
            .with_directory(
                "~/experience",
                &["backbone.txt", "internships.txt", "achievements.txt"],
            )
            .with_file(
                "~/experience/backbone.txt",
                &[
                    "ENTERPRISE BACKBONE TEAM - Network Software Engineer",
                    "====================================================",
                    "",
                    "2023 - present",
                    "",
                    "- Built config-push automation for several thousand devices",
                    "- Cut rollout windows from hours to minutes",
                    "- On-call for the tooling, not the routers (by a narrow margin)",
                ],
            )
            .with_file(
                "~/experience/internships.txt",
                &[
                    "INTERNSHIPS",
                    "===========",
                    "",
                    "Platform intern, 2022",
                    "  CI pipelines and build caching",
                    "",
                    "Network intern, 2021",
                    "  Lab topology tooling",
                ],
            )
            .with_file(
                "~/experience/achievements.txt",
                &[
                    "ACHIEVEMENTS",
                    "============",
                    "",
                    "- Team excellence award for rollout automation",
                    "- Conference talk: 'Testing network tools without a network'",
                ],
            )
            // Children of ~/projects are live-mounted: their nodes are
            // intentionally absent from the static table.
            .with_directory(
                "~/projects",
                &["config-pusher", "topology-mapper", "latency-atlas", "portfolio"],
            )
            .with_directory(
                "~/contact",
                &["email.txt", "github.txt"],
            )
            .with_file(
                "~/contact/email.txt",
                &[
                    "EMAIL",
                    "=====",
                    "",
                    "alex@rivers.dev",
                    "",
                    "Best for collaboration and opportunities.",
                    "Response time: usually within a day.",
                ],
            )
            .with_file(
                "~/contact/github.txt",
                &[
                    "GITHUB",
                    "======",
                    "",
                    "github.com/arivers",
                    "",
                    "Featured: config-pusher, topology-mapper, latency-atlas",
                ],
            )
    }
}
