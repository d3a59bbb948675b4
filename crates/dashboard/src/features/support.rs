//! Shared snapshot fixture for the feature tests.

use domain::Dataset;

const SNAPSHOT: &str = r#"{
    "events": [
        {
            "id": "e1",
            "name": "Spring Robotics Open",
            "category": "Robotics",
            "startDate": "2025-03-01",
            "endDate": "2025-03-02",
            "location": "Denver, CO",
            "status": "active",
            "registrationStatus": "closed",
            "maxTeams": 16,
            "registeredTeams": 12,
            "entryFee": 250.0,
            "totalRevenue": 3000.0,
            "judgeCount": 3
        },
        {
            "id": "e2",
            "name": "Autumn Drone Invitational",
            "category": "Drones",
            "startDate": "2024-11-15",
            "endDate": "2024-11-16",
            "location": "Austin, TX",
            "status": "completed",
            "registrationStatus": "closed",
            "maxTeams": 24,
            "registeredTeams": 24,
            "entryFee": 180.0,
            "totalRevenue": 4320.0,
            "judgeCount": 5
        },
        {
            "id": "e3",
            "name": "Winter Codefest",
            "category": "Programming",
            "startDate": "2026-01-20",
            "endDate": "2026-01-21",
            "location": "Remote",
            "status": "upcoming",
            "registrationStatus": "open",
            "maxTeams": 32,
            "registeredTeams": 10,
            "entryFee": 120.0,
            "totalRevenue": 1200.0,
            "judgeCount": 2
        }
    ],
    "teams": [
        {
            "id": "t1",
            "name": "Robotics United",
            "organization": "Jefferson High",
            "eventId": "e1",
            "captainName": "Maya Chen",
            "captainEmail": "maya@example.org",
            "memberCount": 6,
            "status": "checked-in",
            "registrationDate": "2025-01-10",
            "paymentStatus": "paid",
            "totalScore": 92.5,
            "rank": 1,
            "division": "Open"
        },
        {
            "id": "t2",
            "name": "Falcons",
            "organization": "Westside Prep",
            "eventId": "e1",
            "captainName": "Liam Ortiz",
            "captainEmail": "liam@example.org",
            "memberCount": 5,
            "status": "registered",
            "registrationDate": "2025-01-18",
            "paymentStatus": "overdue",
            "totalScore": null,
            "rank": null,
            "division": "Open"
        },
        {
            "id": "t3",
            "name": "Circuit Breakers",
            "organization": "Eastview Academy",
            "eventId": "e9",
            "captainName": "Rohan Patel",
            "captainEmail": "rohan@example.org",
            "memberCount": 4,
            "status": "competing",
            "registrationDate": "2025-02-02",
            "paymentStatus": "pending",
            "totalScore": null,
            "rank": null,
            "division": "Scholastic"
        }
    ],
    "judges": [
        {
            "id": "j1",
            "name": "Dana Reyes",
            "email": "dana@example.org",
            "role": "head-judge",
            "assignedEvents": ["e1", "e2"],
            "scoredTeams": 12,
            "avgRating": 4.7,
            "specialization": "Autonomous systems"
        }
    ],
    "scores": [
        {
            "id": "s1",
            "teamId": "t1",
            "teamName": "Robotics United",
            "eventId": "e1",
            "judgeId": "j1",
            "judgeName": "Dana Reyes",
            "round": "Qualifier",
            "technicalScore": 29.0,
            "presentationScore": 28.0,
            "innovationScore": 28.0,
            "totalScore": 85.0,
            "timestamp": "2025-03-01T10:30:00",
            "notes": ""
        },
        {
            "id": "s2",
            "teamId": "t1",
            "teamName": "Robotics United",
            "eventId": "e1",
            "judgeId": "j1",
            "judgeName": "Dana Reyes",
            "round": "Final",
            "technicalScore": 31.5,
            "presentationScore": 30.0,
            "innovationScore": 31.0,
            "totalScore": 92.5,
            "timestamp": "2025-03-02T15:00:00",
            "notes": "Strongest autonomous run of the day"
        },
        {
            "id": "s3",
            "teamId": "t2",
            "teamName": "Falcons",
            "eventId": "e1",
            "judgeId": "j1",
            "judgeName": "Dana Reyes",
            "round": "Final",
            "technicalScore": 30.0,
            "presentationScore": 29.0,
            "innovationScore": 29.0,
            "totalScore": 88.0,
            "timestamp": "2025-03-02T15:20:00",
            "notes": ""
        },
        {
            "id": "s4",
            "teamId": "t3",
            "teamName": "Circuit Breakers",
            "eventId": "e1",
            "judgeId": "j1",
            "judgeName": "Dana Reyes",
            "round": "Final",
            "technicalScore": 27.0,
            "presentationScore": 26.5,
            "innovationScore": 26.0,
            "totalScore": 79.5,
            "timestamp": "2025-03-02T15:40:00",
            "notes": ""
        },
        {
            "id": "s5",
            "teamId": "t2",
            "teamName": "Falcons",
            "eventId": "e2",
            "judgeId": "j1",
            "judgeName": "Dana Reyes",
            "round": "Final",
            "technicalScore": 30.0,
            "presentationScore": 30.0,
            "innovationScore": 30.0,
            "totalScore": 90.0,
            "timestamp": "2024-11-16T14:00:00",
            "notes": ""
        }
    ],
    "invoices": [
        {
            "id": "i1",
            "invoiceNumber": "INV-2025-001",
            "teamId": "t1",
            "teamName": "Robotics United",
            "eventId": "e1",
            "eventName": "Spring Robotics Open",
            "amount": 250.0,
            "status": "paid",
            "issuedDate": "2025-01-12",
            "dueDate": "2025-02-12",
            "paidDate": "2025-02-01",
            "paymentMethod": "card",
            "description": "Event registration fee"
        },
        {
            "id": "i2",
            "invoiceNumber": "INV-2025-002",
            "teamId": "t2",
            "teamName": "Falcons",
            "eventId": "e1",
            "eventName": "Spring Robotics Open",
            "amount": 250.0,
            "status": "overdue",
            "issuedDate": "2025-01-19",
            "dueDate": "2025-02-19",
            "paidDate": null,
            "paymentMethod": null,
            "description": "Event registration fee"
        },
        {
            "id": "i3",
            "invoiceNumber": "INV-2025-003",
            "teamId": "t3",
            "teamName": "Circuit Breakers",
            "eventId": "e1",
            "eventName": "Spring Robotics Open",
            "amount": 250.0,
            "status": "pending",
            "issuedDate": "2025-02-03",
            "dueDate": "2025-03-03",
            "paidDate": null,
            "paymentMethod": null,
            "description": "Event registration fee"
        },
        {
            "id": "i4",
            "invoiceNumber": "INV-2024-044",
            "teamId": "t2",
            "teamName": "Falcons",
            "eventId": "e2",
            "eventName": "Autumn Drone Invitational",
            "amount": 180.0,
            "status": "draft",
            "issuedDate": "2024-10-01",
            "dueDate": "2024-11-01",
            "paidDate": null,
            "paymentMethod": null,
            "description": "Late registration"
        }
    ]
}"#;

pub fn sample_dataset() -> Dataset {
    Dataset::from_json_str(SNAPSHOT).unwrap()
}
