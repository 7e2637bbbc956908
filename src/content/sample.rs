//! Compiled-in sample course.
//!
//! Used when no course file is given on the command line, and by tests that
//! need a realistic document without touching the filesystem.

use super::{Block, Course, Section, TabGroupKind, TabPanel};

impl Course {
    /// A small Jakarta EE introduction course exercising every block kind.
    pub fn sample() -> Course {
        Course {
            title: "Jakarta EE Fundamentals".to_string(),
            sections: vec![
                Section {
                    id: "introduction".to_string(),
                    title: "Introduction".to_string(),
                    blocks: vec![
                        Block::Text {
                            body: "Jakarta EE is a set of specifications for building \
                                   enterprise Java applications: web services, persistence, \
                                   dependency injection and messaging, portable across \
                                   application servers."
                                .to_string(),
                        },
                        Block::Card {
                            title: "What you will learn".to_string(),
                            body: "The platform architecture, the core APIs, and how a \
                                   request travels from the servlet container to the \
                                   database and back."
                                .to_string(),
                        },
                    ],
                },
                Section {
                    id: "architecture".to_string(),
                    title: "Architecture".to_string(),
                    blocks: vec![
                        Block::Text {
                            body: "A Jakarta EE application is organized in tiers. Expand \
                                   each layer below to see its responsibilities."
                                .to_string(),
                        },
                        Block::Layer {
                            title: "Web tier".to_string(),
                            detail: "Servlets, Jakarta Faces and REST endpoints. Receives \
                                     HTTP requests and produces responses."
                                .to_string(),
                        },
                        Block::Layer {
                            title: "Business tier".to_string(),
                            detail: "Enterprise beans and CDI-managed services. Holds \
                                     transactional business logic."
                                .to_string(),
                        },
                        Block::Layer {
                            title: "Database layer".to_string(),
                            detail: "Jakarta Persistence entities and the entity manager. \
                                     Maps objects to relational tables."
                                .to_string(),
                        },
                    ],
                },
                Section {
                    id: "features".to_string(),
                    title: "Core APIs".to_string(),
                    blocks: vec![
                        Block::Tabs {
                            group: TabGroupKind::Feature,
                            tabs: vec![
                                TabPanel {
                                    key: "cdi".to_string(),
                                    label: "CDI".to_string(),
                                    body: "Contexts and Dependency Injection wires \
                                           components together with @Inject and scopes."
                                        .to_string(),
                                },
                                TabPanel {
                                    key: "jpa".to_string(),
                                    label: "Persistence".to_string(),
                                    body: "Jakarta Persistence maps entities to tables \
                                           and exposes JPQL for queries."
                                        .to_string(),
                                },
                                TabPanel {
                                    key: "rest".to_string(),
                                    label: "REST".to_string(),
                                    body: "Jakarta REST exposes resources over HTTP with \
                                           annotated resource classes."
                                        .to_string(),
                                },
                            ],
                        },
                        Block::Card {
                            title: "Specification first".to_string(),
                            body: "Every API is a specification with multiple \
                                   implementations; code written against the API runs on \
                                   any compliant server."
                                .to_string(),
                        },
                    ],
                },
                Section {
                    id: "examples".to_string(),
                    title: "Worked Examples".to_string(),
                    blocks: vec![
                        Block::Tabs {
                            group: TabGroupKind::Example,
                            tabs: vec![
                                TabPanel {
                                    key: "servlet".to_string(),
                                    label: "Servlet".to_string(),
                                    body: "A minimal servlet mapped with @WebServlet, \
                                           writing a plain-text response."
                                        .to_string(),
                                },
                                TabPanel {
                                    key: "entity".to_string(),
                                    label: "Entity".to_string(),
                                    body: "An @Entity class with an @Id field, persisted \
                                           through an injected EntityManager."
                                        .to_string(),
                                },
                            ],
                        },
                        Block::Code {
                            lang: "java".to_string(),
                            source: "@WebServlet(\"/hello\")\n\
                                     public class HelloServlet extends HttpServlet {\n\
                                     \u{20}   protected void doGet(HttpServletRequest req,\n\
                                     \u{20}                        HttpServletResponse resp)\n\
                                     \u{20}           throws IOException {\n\
                                     \u{20}       resp.getWriter().println(\"Hello, Jakarta EE\");\n\
                                     \u{20}   }\n\
                                     }"
                                .to_string(),
                        },
                    ],
                },
                Section {
                    id: "assessment".to_string(),
                    title: "Self Assessment".to_string(),
                    blocks: vec![
                        Block::Text {
                            body: "Check off what you can explain without looking back."
                                .to_string(),
                        },
                        Block::Checklist {
                            items: vec![
                                "Name the three application tiers".to_string(),
                                "Describe what CDI provides".to_string(),
                                "Map an entity class to a table".to_string(),
                                "Expose a REST resource".to_string(),
                            ],
                        },
                    ],
                },
            ],
        }
    }
}
