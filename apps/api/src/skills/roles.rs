//! Job-role catalog: the skills each target role expects.
//!
//! Phrases are human-readable and deliberately not normalized to the taxonomy
//! vocabulary. Gap analysis bridges the two with substring containment.

/// Role name → required skill phrases, in catalog order.
pub static JOB_ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "Software Developer / Engineer",
        &[
            "Data Structures & Algorithms",
            "Object-Oriented Programming",
            "Version Control (Git)",
            "Software Development Lifecycle (SDLC)",
            "Debugging & Troubleshooting",
            "Database Management",
            "Agile Methodologies",
            "Unit Testing",
        ],
    ),
    (
        "Full Stack Developer",
        &[
            "HTML/CSS/JavaScript",
            "React.js or Angular",
            "Node.js or Django",
            "RESTful APIs",
            "Database Systems (SQL/NoSQL)",
            "Authentication & Authorization",
            "DevOps Basics",
            "Version Control (Git)",
        ],
    ),
    (
        "Front-End Developer (React, Angular, etc.)",
        &[
            "HTML/CSS",
            "JavaScript/TypeScript",
            "React.js/Angular/Vue.js",
            "Responsive Design",
            "Cross-Browser Compatibility",
            "State Management (Redux, Context API)",
            "Webpack/Vite",
            "UI/UX Principles",
        ],
    ),
    (
        "Back-End Developer (Node.js, Django, Spring Boot, etc.)",
        &[
            "Server-Side Languages (Java, Python, JS)",
            "Database Design",
            "RESTful API Development",
            "Authentication & Authorization",
            "ORMs (Hibernate, Sequelize, etc.)",
            "Microservices Architecture",
            "Caching (Redis, Memcached)",
            "Security Best Practices",
        ],
    ),
    (
        "Mobile App Developer (Android/iOS)",
        &[
            "Kotlin/Java (Android)",
            "Swift/Objective-C (iOS)",
            "Flutter/React Native",
            "Mobile UI/UX Design",
            "APIs & JSON Parsing",
            "App Deployment",
            "State Management",
            "Version Control",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "CI/CD Pipelines",
            "Docker & Kubernetes",
            "Infrastructure as Code (Terraform/Ansible)",
            "Cloud Platforms (AWS/Azure/GCP)",
            "Monitoring Tools (Prometheus, Grafana)",
            "Scripting (Bash/Python)",
            "Version Control",
            "System Administration",
        ],
    ),
    (
        "Site Reliability Engineer (SRE)",
        &[
            "System Monitoring",
            "Incident Management",
            "Automation & Scripting",
            "Cloud Infrastructure",
            "CI/CD",
            "Performance Tuning",
            "SLIs/SLOs",
            "Containerization",
        ],
    ),
    (
        "Embedded Software Engineer",
        &[
            "C/C++",
            "RTOS",
            "Microcontrollers (ARM, AVR)",
            "Low-Level Programming",
            "Embedded Linux",
            "I2C/SPI/UART",
            "PCB Debugging",
            "Memory Optimization",
        ],
    ),
    (
        "Game Developer",
        &[
            "C++/C#",
            "Unity/Unreal Engine",
            "Game Physics",
            "3D Math",
            "Graphics APIs (OpenGL/DirectX)",
            "Version Control",
            "Shader Programming",
            "AI for Games",
        ],
    ),
    (
        "API Developer",
        &[
            "RESTful API Design",
            "GraphQL",
            "Swagger/OpenAPI",
            "Authentication (OAuth2, JWT)",
            "Rate Limiting",
            "Error Handling",
            "API Versioning",
            "Testing Tools (Postman, Insomnia)",
        ],
    ),
    (
        "Software Architect",
        &[
            "System Design",
            "Design Patterns",
            "Architecture Styles (Microservices, Monoliths)",
            "UML Diagrams",
            "Scalability & Performance",
            "Security Architecture",
            "Tech Stack Evaluation",
            "DevOps Integration",
        ],
    ),
    (
        "Cloud Developer (AWS/GCP/Azure)",
        &[
            "Cloud Services (EC2, Lambda, S3)",
            "Infrastructure as Code",
            "Serverless Computing",
            "Containers",
            "Cloud Security",
            "CI/CD Pipelines",
            "Monitoring & Logging",
            "SDKs & APIs",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Python/R",
            "Statistics",
            "Machine Learning",
            "Data Cleaning",
            "Data Visualization",
            "SQL",
            "Model Evaluation",
            "Big Data Tools",
        ],
    ),
    (
        "Data Analyst",
        &[
            "Excel",
            "SQL",
            "Data Visualization Tools (Tableau, Power BI)",
            "Python (Pandas, NumPy)",
            "Business Acumen",
            "Descriptive Statistics",
            "Reporting & Dashboards",
            "Data Wrangling",
        ],
    ),
    (
        "Business Intelligence Analyst",
        &[
            "Data Warehousing",
            "SQL",
            "ETL Processes",
            "BI Tools (Tableau, Power BI)",
            "KPI Analysis",
            "Data Modeling",
            "Reporting Automation",
            "Data Governance",
        ],
    ),
    (
        "Machine Learning Engineer",
        &[
            "Supervised/Unsupervised Learning",
            "Model Deployment (Flask/FastAPI)",
            "Feature Engineering",
            "Scikit-learn",
            "Deep Learning Frameworks (TensorFlow, PyTorch)",
            "MLOps Basics",
            "Data Pipelines",
            "Model Optimization",
        ],
    ),
    (
        "Data Engineer",
        &[
            "ETL Pipelines",
            "Big Data Technologies (Hadoop, Spark)",
            "SQL & NoSQL",
            "Data Warehousing",
            "Cloud Data Services",
            "Python/Scala",
            "Airflow/Luigi",
            "Streaming Data",
        ],
    ),
    (
        "Big Data Engineer",
        &[
            "Apache Spark",
            "Hadoop Ecosystem",
            "Kafka",
            "HDFS",
            "Distributed Computing",
            "SQL/NoSQL",
            "Data Ingestion",
            "Data Lake Architecture",
        ],
    ),
    (
        "Decision Scientist",
        &[
            "A/B Testing",
            "Causal Inference",
            "Statistical Modeling",
            "R/Python",
            "Experiment Design",
            "Business KPIs",
            "Visualization",
            "Data Interpretation",
        ],
    ),
    (
        "AI/ML Research Scientist",
        &[
            "Mathematics (Linear Algebra, Probability)",
            "Deep Learning",
            "Research Methodology",
            "Model Architectures",
            "Paper Reading & Writing",
            "Experimentation",
            "Python + PyTorch/TensorFlow",
            "High-Performance Computing",
        ],
    ),
    (
        "NLP Engineer",
        &[
            "Text Preprocessing",
            "Language Modeling",
            "Transformers (BERT, GPT)",
            "NER & POS Tagging",
            "Word Embeddings",
            "SpaCy/NLTK",
            "Text Classification",
            "Question Answering",
        ],
    ),
    (
        "Deep Learning Engineer",
        &[
            "Neural Networks",
            "CNNs/RNNs",
            "PyTorch/TensorFlow",
            "Model Training & Evaluation",
            "Hyperparameter Tuning",
            "Transfer Learning",
            "GPU Computing",
            "Data Augmentation",
        ],
    ),
    (
        "Computer Vision Engineer",
        &[
            "Image Processing",
            "OpenCV",
            "CNNs",
            "Object Detection (YOLO, SSD)",
            "Segmentation Techniques",
            "Deep Learning Frameworks",
            "Dataset Annotation",
            "Model Optimization",
        ],
    ),
    (
        "MLOps Engineer",
        &[
            "Model Deployment",
            "CI/CD for ML",
            "Model Monitoring",
            "Docker & Kubernetes",
            "Data Versioning (DVC)",
            "MLflow/TensorBoard",
            "Pipeline Automation",
            "Cloud ML Tools",
        ],
    ),
    (
        "Cybersecurity Analyst",
        &[
            "Threat Detection",
            "SIEM Tools",
            "Incident Response",
            "Network Security",
            "Risk Assessment",
            "Log Analysis",
            "Firewalls & IDS/IPS",
            "Security Policies",
        ],
    ),
    (
        "Security Engineer",
        &[
            "System Hardening",
            "Vulnerability Management",
            "Penetration Testing",
            "Cloud Security",
            "Network Protocols",
            "Secure Coding",
            "Encryption",
            "Monitoring Tools",
        ],
    ),
    (
        "Penetration Tester / Ethical Hacker",
        &[
            "Reconnaissance Techniques",
            "Exploitation Frameworks (Metasploit)",
            "Network Scanning",
            "Web App Security",
            "OWASP Top 10",
            "Social Engineering",
            "Scripting",
            "Report Writing",
        ],
    ),
    (
        "Security Architect",
        &[
            "Security Frameworks (NIST, ISO)",
            "Architecture Design",
            "Zero Trust",
            "Cloud Security Architecture",
            "IAM",
            "Risk Management",
            "DevSecOps",
            "Threat Modeling",
        ],
    ),
    (
        "Network Security Engineer",
        &[
            "Firewall Configuration",
            "VPNs",
            "IDS/IPS",
            "Routing Protocols",
            "Security Audits",
            "Network Monitoring",
            "NAC",
            "Packet Analysis",
        ],
    ),
    (
        "SOC Analyst",
        &[
            "Security Alerts Analysis",
            "SIEM Tools",
            "Log Management",
            "Incident Response Playbooks",
            "Threat Intelligence",
            "Triage & Escalation",
            "Ticketing Systems",
            "Shift Work Experience",
        ],
    ),
    (
        "Information Security Analyst",
        &[
            "Security Policies",
            "Data Loss Prevention",
            "Access Control",
            "Compliance Standards",
            "Risk Assessment",
            "Antivirus/EDR",
            "Incident Handling",
            "Vulnerability Scanning",
        ],
    ),
    (
        "Cryptographer",
        &[
            "Symmetric/Asymmetric Encryption",
            "Cryptographic Protocols",
            "Public Key Infrastructure (PKI)",
            "Blockchain Basics",
            "Mathematics",
            "Hash Functions",
            "Digital Signatures",
            "Secure Communication",
        ],
    ),
    (
        "Cloud Solutions Architect",
        &[
            "Cloud Platforms (AWS/GCP/Azure)",
            "Solution Design",
            "Scalability & Redundancy",
            "Security Best Practices",
            "Hybrid Architecture",
            "Networking",
            "Cost Optimization",
            "Cloud Migrations",
        ],
    ),
    (
        "Cloud Engineer",
        &[
            "Cloud Services Deployment",
            "Automation Scripts",
            "Containers & Orchestration",
            "Monitoring Tools",
            "Networking",
            "Cloud Security",
            "DevOps Tools",
            "IAM Management",
        ],
    ),
    (
        "System Administrator",
        &[
            "Linux/Windows Administration",
            "Shell Scripting",
            "User Management",
            "Backup & Recovery",
            "Monitoring Tools",
            "Networking Basics",
            "Patch Management",
            "Server Configuration",
        ],
    ),
    (
        "Network Engineer",
        &[
            "TCP/IP",
            "Routing/Switching",
            "Network Troubleshooting",
            "Firewalls",
            "VPNs",
            "Cisco Devices",
            "QoS",
            "LAN/WAN Design",
        ],
    ),
    (
        "IT Infrastructure Engineer",
        &[
            "Hardware Management",
            "Network Configuration",
            "Server Administration",
            "Virtualization",
            "Storage Solutions",
            "Disaster Recovery",
            "Monitoring Tools",
            "Compliance Standards",
        ],
    ),
    (
        "Database Administrator (DBA)",
        &[
            "SQL",
            "Database Design",
            "Backup & Recovery",
            "Indexing & Optimization",
            "Replication",
            "Security & Access Control",
            "Monitoring",
            "Stored Procedures",
        ],
    ),
    (
        "Virtualization Engineer",
        &[
            "VMware/Hyper-V",
            "Virtual Machine Management",
            "Storage Integration",
            "Disaster Recovery",
            "Network Configuration",
            "Automation Tools",
            "Patch Management",
            "Security Settings",
        ],
    ),
    (
        "Storage Engineer",
        &[
            "SAN/NAS",
            "RAID Configurations",
            "Backup Solutions",
            "Storage Provisioning",
            "Performance Tuning",
            "Data Migration",
            "Disaster Recovery",
            "Monitoring Tools",
        ],
    ),
    (
        "Technical Support Engineer",
        &[
            "Troubleshooting Skills",
            "Remote Desktop Tools",
            "Ticketing Systems",
            "Networking Basics",
            "OS Installation",
            "Hardware Support",
            "Communication Skills",
            "User Training",
        ],
    ),
    (
        "IT Support Specialist",
        &[
            "Technical Documentation",
            "Customer Support",
            "Problem Solving",
            "Windows/Mac/Linux Support",
            "Software Installation",
            "System Monitoring",
            "Printer/Peripheral Setup",
            "Email/Outlook Support",
        ],
    ),
    (
        "Help Desk Technician",
        &[
            "Basic Networking",
            "Account Setup",
            "Password Resets",
            "Customer Service",
            "Documentation",
            "Antivirus Installation",
            "Incident Logging",
            "Remote Assistance",
        ],
    ),
    (
        "System Support Engineer",
        &[
            "OS & Server Maintenance",
            "Hardware Diagnosis",
            "Performance Monitoring",
            "Scripting (PowerShell/Bash)",
            "User Access Management",
            "Network Tools",
            "Patch Updates",
            "System Logs Analysis",
        ],
    ),
    (
        "Desktop Support Engineer",
        &[
            "Workstation Setup",
            "Troubleshooting",
            "Hardware Replacement",
            "Remote Support",
            "OS Configuration",
            "Software Installation",
            "Printer Issues",
            "Asset Management",
        ],
    ),
    (
        "QA Engineer",
        &[
            "Test Planning",
            "Bug Reporting",
            "Functional Testing",
            "Regression Testing",
            "Test Case Design",
            "Automation Basics",
            "JIRA/TestRail",
            "Agile Testing",
        ],
    ),
    (
        "Automation Test Engineer",
        &[
            "Selenium",
            "TestNG/JUnit",
            "CI/CD Tools",
            "Java/Python Scripting",
            "API Testing",
            "Test Automation Frameworks",
            "Bug Tracking Tools",
            "Reporting",
        ],
    ),
    (
        "Manual Test Engineer",
        &[
            "Test Cases Design",
            "Functional Testing",
            "Regression Testing",
            "Exploratory Testing",
            "Defect Reporting",
            "Cross-Browser Testing",
            "Test Documentation",
            "Agile Practices",
        ],
    ),
    (
        "Performance Tester",
        &[
            "JMeter/LoadRunner",
            "Load Testing",
            "Stress Testing",
            "Bottleneck Analysis",
            "Monitoring Tools",
            "Scripting Skills",
            "Test Data Preparation",
            "Result Analysis",
        ],
    ),
    (
        "SDET (Software Development Engineer in Test)",
        &[
            "OOP Concepts",
            "Selenium/Test Automation",
            "API Testing",
            "Unit Testing",
            "CI/CD Integration",
            "Framework Development",
            "Java/Python",
            "Agile/DevOps Practices",
        ],
    ),
    (
        "Test Architect",
        &[
            "Test Strategy",
            "Automation Architecture",
            "Tool Selection",
            "Framework Design",
            "CI/CD Integration",
            "Mentoring Test Teams",
            "Performance & Security Testing",
            "Scalability Testing",
        ],
    ),
    (
        "UI Developer",
        &[
            "HTML/CSS/JavaScript",
            "Responsive Design",
            "Cross-Browser Compatibility",
            "UI Frameworks",
            "Design to Code Conversion",
            "CSS Preprocessors",
            "Version Control",
            "Accessibility Standards",
        ],
    ),
    (
        "UX Designer",
        &[
            "User Research",
            "Wireframing",
            "Prototyping Tools (Figma, Adobe XD)",
            "Information Architecture",
            "User Journey Mapping",
            "Usability Testing",
            "Interaction Design",
            "Design Thinking",
        ],
    ),
    (
        "Web Developer",
        &[
            "HTML/CSS/JavaScript",
            "Frontend Frameworks",
            "Backend Technologies",
            "Databases",
            "API Integration",
            "Responsive Design",
            "Web Hosting",
            "Version Control",
        ],
    ),
    (
        "Frontend Engineer",
        &[
            "React/Angular/Vue",
            "JavaScript/TypeScript",
            "Performance Optimization",
            "Unit Testing",
            "State Management",
            "CI/CD",
            "Accessibility",
            "CSS-in-JS",
        ],
    ),
    (
        "Interaction Designer",
        &[
            "Animation Principles",
            "Wireframes & Prototypes",
            "Microinteractions",
            "Design Systems",
            "Figma/Sketch",
            "Usability Testing",
            "Motion Design",
            "User Flow Design",
        ],
    ),
    (
        "AI Research Scientist",
        &[
            "Mathematical Modeling",
            "Deep Learning",
            "Research Paper Writing",
            "Neural Architecture Search",
            "Experimentation",
            "Data Collection",
            "Model Evaluation",
            "Scientific Computing",
        ],
    ),
    (
        "Robotics Engineer",
        &[
            "Robot Kinematics",
            "Embedded Systems",
            "Sensor Integration",
            "ROS (Robot Operating System)",
            "Path Planning",
            "Control Theory",
            "Computer Vision",
            "Simulation Tools",
        ],
    ),
    (
        "Quantum Computing Researcher",
        &[
            "Quantum Mechanics",
            "Qiskit/Cirq",
            "Linear Algebra",
            "Quantum Algorithms",
            "Quantum Gates",
            "Complexity Theory",
            "Simulation Tools",
            "Research & Publications",
        ],
    ),
    (
        "Blockchain Developer",
        &[
            "Smart Contracts (Solidity)",
            "Ethereum/BTC Protocols",
            "DApp Development",
            "Cryptography",
            "Consensus Mechanisms",
            "Web3.js",
            "Blockchain Security",
            "Decentralized Storage",
        ],
    ),
    (
        "AR/VR Developer",
        &[
            "Unity/Unreal",
            "3D Modeling",
            "ARKit/ARCore",
            "Computer Vision",
            "XR Interaction",
            "Shader Programming",
            "VR Hardware Integration",
            "Spatial Audio",
        ],
    ),
    (
        "Computer Vision Researcher",
        &[
            "Object Detection",
            "Segmentation",
            "Deep Learning",
            "Mathematical Modeling",
            "Dataset Preparation",
            "Custom Architectures",
            "Paper Implementation",
            "Benchmarking",
        ],
    ),
    (
        "Technical Program Manager (TPM)",
        &[
            "Project Management",
            "Agile/Scrum",
            "Technical Documentation",
            "Stakeholder Communication",
            "Risk Management",
            "Resource Planning",
            "Roadmap Definition",
            "Cross-Team Coordination",
        ],
    ),
    (
        "Engineering Manager",
        &[
            "Team Leadership",
            "Code Reviews",
            "Hiring & Mentoring",
            "Project Management",
            "Technical Strategy",
            "Sprint Planning",
            "Architecture Oversight",
            "Performance Reviews",
        ],
    ),
    (
        "Product Manager (Technical)",
        &[
            "Product Lifecycle",
            "User Research",
            "Technical Background",
            "Roadmapping",
            "Wireframing",
            "Agile Methodology",
            "Stakeholder Management",
            "Data-Driven Decisions",
        ],
    ),
    (
        "IT Consultant",
        &[
            "Requirement Analysis",
            "System Integration",
            "Technology Evaluation",
            "Client Communication",
            "Solution Architecture",
            "Documentation",
            "Change Management",
            "IT Governance",
        ],
    ),
];

/// Looks up the required skills for an exact role name.
pub fn required_skills(role: &str) -> Option<&'static [&'static str]> {
    JOB_ROLE_SKILLS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, skills)| *skills)
}

/// All role names in catalog order.
pub fn role_names() -> impl Iterator<Item = &'static str> {
    JOB_ROLE_SKILLS.iter().map(|(name, _)| *name)
}
