//! Static skill taxonomy used for resume extraction.
//!
//! Skills are stored lower-case; extraction matches against lower-cased text.

/// Category name → skills, in display order.
pub static TECHNICAL_SKILLS: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python",
            "javascript",
            "java",
            "c++",
            "c#",
            "go",
            "rust",
            "typescript",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "scala",
            "r",
            "matlab",
        ],
    ),
    (
        "Database Technologies",
        &[
            "sql",
            "mysql",
            "postgresql",
            "mongodb",
            "oracle",
            "microsoft sql server",
            "sqlite",
            "redis",
            "cassandra",
            "dynamodb",
            "elasticsearch",
        ],
    ),
    (
        "Cloud Platforms",
        &[
            "aws",
            "azure",
            "google cloud platform",
            "gcp",
            "ibm cloud",
            "oracle cloud",
            "heroku",
            "digitalocean",
        ],
    ),
    (
        "Web Frameworks & Libraries",
        &[
            "react",
            "angular",
            "vue.js",
            "django",
            "flask",
            "spring boot",
            "express.js",
            "ruby on rails",
            "asp.net",
            "laravel",
        ],
    ),
    (
        "DevOps & Deployment",
        &[
            "docker",
            "kubernetes",
            "jenkins",
            "gitlab ci/cd",
            "github actions",
            "terraform",
            "ansible",
            "puppet",
            "chef",
            "circleci",
        ],
    ),
    (
        "Data Science & AI",
        &[
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "pandas",
            "numpy",
            "keras",
            "nltk",
            "spacy",
            "apache spark",
            "hadoop",
        ],
    ),
    (
        "Frontend Technologies",
        &[
            "html5",
            "css3",
            "sass",
            "scss",
            "bootstrap",
            "tailwind",
            "jquery",
            "redux",
            "webpack",
            "graphql",
            "material ui",
        ],
    ),
    (
        "Mobile Development",
        &[
            "react native",
            "flutter",
            "xamarin",
            "ionic",
            "android sdk",
            "ios sdk",
            "cordova",
        ],
    ),
    (
        "Version Control",
        &[
            "git",
            "svn",
            "mercurial",
        ],
    ),
    (
        "Testing Tools",
        &[
            "jest",
            "selenium",
            "junit",
            "mocha",
            "cypress",
            "testng",
            "pytest",
        ],
    ),
    (
        "Project Management & Methodologies",
        &[
            "agile",
            "scrum",
            "kanban",
            "jira",
            "confluence",
            "trello",
        ],
    ),
];
