// The Ashby tool catalog: one entry per exposed tool, each bound to exactly
// one POST endpoint.

use crate::protocol::ToolSchema;
use crate::tools::registry::{json_schema_for, json_schema_object};
use serde_json::{Map, Value};

/// JSON type of a tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Integer,
    Boolean,
    StringArray,
}

/// Default advertised for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyDefault {
    Integer(i64),
    Boolean(bool),
}

impl PropertyDefault {
    fn to_value(self) -> Value {
        match self {
            Self::Integer(n) => Value::from(n),
            Self::Boolean(b) => Value::from(b),
        }
    }
}

/// One declared argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub description: &'static str,
    pub default: Option<PropertyDefault>,
}

pub const fn string(name: &'static str, description: &'static str) -> Property {
    Property {
        name,
        kind: PropertyKind::String,
        description,
        default: None,
    }
}

pub const fn string_array(name: &'static str, description: &'static str) -> Property {
    Property {
        name,
        kind: PropertyKind::StringArray,
        description,
        default: None,
    }
}

pub const fn integer(name: &'static str, description: &'static str, default: i64) -> Property {
    Property {
        name,
        kind: PropertyKind::Integer,
        description,
        default: Some(PropertyDefault::Integer(default)),
    }
}

pub const fn boolean(name: &'static str, description: &'static str, default: bool) -> Property {
    Property {
        name,
        kind: PropertyKind::Boolean,
        description,
        default: Some(PropertyDefault::Boolean(default)),
    }
}

/// A tool exposed over MCP and the Ashby endpoint it forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub description: &'static str,
    pub properties: &'static [Property],
    pub required: &'static [&'static str],
}

impl ToolSpec {
    /// Build the MCP descriptor, including the JSON input schema.
    pub fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        for property in self.properties {
            let mut schema = json_schema_for(property.kind, property.description);
            if let Some(default) = property.default {
                schema["default"] = default.to_value();
            }
            properties.insert(property.name.to_string(), schema);
        }

        ToolSchema {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: json_schema_object(properties, self.required),
        }
    }
}

const CURSOR: Property = string("cursor", "Pagination cursor");
const LIMIT: Property = integer("limit", "Number of results", 50);
const LIMIT_MAX_100: Property = integer("limit", "Number of results (max 100)", 50);

/// Every tool, in the order `tools/list` reports them.
pub static CATALOG: &[ToolSpec] = &[
    // Candidates
    ToolSpec {
        name: "candidate_create",
        endpoint: "/candidate.create",
        description: "Create a new candidate in Ashby. Returns the created candidate with ID.",
        properties: &[
            string("name", "Candidate's full name"),
            string("email", "Candidate's email address"),
            string("phoneNumber", "Candidate's phone number"),
            string("linkedInUrl", "LinkedIn profile URL"),
            string("location", "Candidate's location"),
            string("sourceId", "Source ID for attribution"),
        ],
        required: &["name", "email"],
    },
    ToolSpec {
        name: "candidate_search",
        endpoint: "/candidate.search",
        description: "Search for candidates by email or name. Use for finding specific candidates.",
        properties: &[
            string("email", "Email to search for (exact match)"),
            string("name", "Name to search for (partial match)"),
        ],
        required: &[],
    },
    ToolSpec {
        name: "candidate_list",
        endpoint: "/candidate.list",
        description: "List all candidates with pagination. Use cursor for subsequent pages.",
        properties: &[
            string("cursor", "Pagination cursor from previous response"),
            LIMIT_MAX_100,
        ],
        required: &[],
    },
    ToolSpec {
        name: "candidate_info",
        endpoint: "/candidate.info",
        description: "Get detailed information about a specific candidate by ID.",
        properties: &[string("candidateId", "The candidate's unique ID")],
        required: &["candidateId"],
    },
    ToolSpec {
        name: "candidate_update",
        endpoint: "/candidate.update",
        description: "Update an existing candidate's information.",
        properties: &[
            string("candidateId", "The candidate's unique ID"),
            string("name", "Updated name"),
            string("email", "Updated email"),
            string("phoneNumber", "Updated phone"),
            string("linkedInUrl", "Updated LinkedIn URL"),
            string("location", "Updated location"),
        ],
        required: &["candidateId"],
    },
    ToolSpec {
        name: "candidate_add_note",
        endpoint: "/candidate.createNote",
        description: "Add a note to a candidate's profile.",
        properties: &[
            string("candidateId", "The candidate's unique ID"),
            string("note", "The note content"),
            boolean("sendNotifications", "Send notifications about the note", false),
        ],
        required: &["candidateId", "note"],
    },
    ToolSpec {
        name: "candidate_add_tag",
        endpoint: "/candidate.addTag",
        description: "Add a tag to a candidate for organization/filtering.",
        properties: &[
            string("candidateId", "The candidate's unique ID"),
            string("tagId", "The tag ID to add"),
        ],
        required: &["candidateId", "tagId"],
    },
    ToolSpec {
        name: "candidate_list_notes",
        endpoint: "/candidate.listNotes",
        description: "List all notes on a candidate's profile.",
        properties: &[string("candidateId", "The candidate's unique ID")],
        required: &["candidateId"],
    },
    // Jobs
    ToolSpec {
        name: "job_create",
        endpoint: "/job.create",
        description: "Create a new job posting in Ashby.",
        properties: &[
            string("title", "Job title"),
            string("departmentId", "Department ID"),
            string("locationId", "Location ID"),
            string("employmentType", "Full-time, Part-time, Contract, etc."),
            string("description", "Job description (HTML supported)"),
        ],
        required: &["title"],
    },
    ToolSpec {
        name: "job_search",
        endpoint: "/job.search",
        description: "Search for jobs by title or filters.",
        properties: &[
            string("title", "Job title to search for"),
            string("status", "Filter by status: Open, Closed, Draft, Archived"),
            string("departmentId", "Filter by department ID"),
            string("locationId", "Filter by location ID"),
        ],
        required: &[],
    },
    ToolSpec {
        name: "job_list",
        endpoint: "/job.list",
        description: "List all jobs with pagination.",
        properties: &[
            CURSOR,
            LIMIT_MAX_100,
            boolean("includeArchived", "Include archived jobs", false),
        ],
        required: &[],
    },
    ToolSpec {
        name: "job_info",
        endpoint: "/job.info",
        description: "Get detailed information about a specific job.",
        properties: &[string("jobId", "The job's unique ID")],
        required: &["jobId"],
    },
    ToolSpec {
        name: "job_set_status",
        endpoint: "/job.setStatus",
        description: "Update a job's status (Open, Closed, Draft, Archived).",
        properties: &[
            string("jobId", "The job's unique ID"),
            string("status", "New status: Open, Closed, Draft, Archived"),
        ],
        required: &["jobId", "status"],
    },
    // Applications
    ToolSpec {
        name: "application_create",
        endpoint: "/application.create",
        description: "Create an application - consider a candidate for a job.",
        properties: &[
            string("candidateId", "The candidate's ID"),
            string("jobId", "The job's ID"),
            string("sourceId", "Application source ID"),
            string("interviewStageId", "Initial interview stage ID"),
        ],
        required: &["candidateId", "jobId"],
    },
    ToolSpec {
        name: "application_list",
        endpoint: "/application.list",
        description: "List applications with filtering and pagination.",
        properties: &[
            CURSOR,
            LIMIT_MAX_100,
            string("jobId", "Filter by job ID"),
            string("candidateId", "Filter by candidate ID"),
            string("status", "Filter by status: Active, Hired, Archived"),
        ],
        required: &[],
    },
    ToolSpec {
        name: "application_info",
        endpoint: "/application.info",
        description: "Get detailed information about a specific application.",
        properties: &[string("applicationId", "The application's unique ID")],
        required: &["applicationId"],
    },
    // Ashby names these two with an underscore, unlike the camelCase elsewhere.
    ToolSpec {
        name: "application_change_stage",
        endpoint: "/application.change_stage",
        description: "Move an application to a different interview stage.",
        properties: &[
            string("applicationId", "The application's ID"),
            string("interviewStageId", "Target interview stage ID"),
            string("archiveReasonId", "Required when moving to Archived stage"),
        ],
        required: &["applicationId", "interviewStageId"],
    },
    ToolSpec {
        name: "application_change_source",
        endpoint: "/application.change_source",
        description: "Update the source attribution for an application.",
        properties: &[
            string("applicationId", "The application's ID"),
            string("sourceId", "New source ID (null to clear)"),
        ],
        required: &["applicationId", "sourceId"],
    },
    ToolSpec {
        name: "application_update",
        endpoint: "/application.update",
        description: "Update application properties.",
        properties: &[
            string("applicationId", "The application's ID"),
            string("creditedToUserId", "User to credit the application to"),
        ],
        required: &["applicationId"],
    },
    // Interviews
    ToolSpec {
        name: "interview_list",
        endpoint: "/interview.list",
        description: "List interviews with optional filtering.",
        properties: &[
            CURSOR,
            LIMIT,
            string("applicationId", "Filter by application ID"),
        ],
        required: &[],
    },
    ToolSpec {
        name: "interview_schedule_create",
        endpoint: "/interviewSchedule.create",
        description: "Create/schedule a new interview.",
        properties: &[
            string("applicationId", "Application ID for this interview"),
            string_array("interviewerUserIds", "List of interviewer user IDs"),
            string("startTime", "ISO 8601 start time"),
            string("endTime", "ISO 8601 end time"),
            string("interviewStageId", "Interview stage ID"),
            string("feedbackFormDefinitionId", "Feedback form to use"),
        ],
        required: &["applicationId", "interviewerUserIds", "startTime", "endTime"],
    },
    ToolSpec {
        name: "interview_schedule_list",
        endpoint: "/interviewSchedule.list",
        description: "List scheduled interviews with filtering.",
        properties: &[
            CURSOR,
            LIMIT,
            string("startTimeAfter", "Filter: start time after (ISO 8601)"),
            string("startTimeBefore", "Filter: start time before (ISO 8601)"),
        ],
        required: &[],
    },
    ToolSpec {
        name: "interview_schedule_update",
        endpoint: "/interviewSchedule.update",
        description: "Update an existing interview schedule.",
        properties: &[
            string("interviewScheduleId", "The schedule ID to update"),
            string("startTime", "New start time (ISO 8601)"),
            string("endTime", "New end time (ISO 8601)"),
            string_array("interviewerUserIds", "Updated list of interviewer IDs"),
        ],
        required: &["interviewScheduleId"],
    },
    ToolSpec {
        name: "interview_schedule_cancel",
        endpoint: "/interviewSchedule.cancel",
        description: "Cancel a scheduled interview.",
        properties: &[
            string("interviewScheduleId", "The schedule ID to cancel"),
            string("reason", "Cancellation reason"),
        ],
        required: &["interviewScheduleId"],
    },
    // Organization
    ToolSpec {
        name: "user_list",
        endpoint: "/user.list",
        description: "List all users in the Ashby organization.",
        properties: &[
            CURSOR,
            LIMIT,
            boolean("includeDeactivated", "Include deactivated users", false),
        ],
        required: &[],
    },
    ToolSpec {
        name: "user_search",
        endpoint: "/user.search",
        description: "Search for users by email or name.",
        properties: &[
            string("email", "Email to search for"),
            string("name", "Name to search for"),
        ],
        required: &[],
    },
    ToolSpec {
        name: "department_list",
        endpoint: "/department.list",
        description: "List all departments in the organization.",
        properties: &[
            CURSOR,
            boolean("includeArchived", "Include archived departments", false),
        ],
        required: &[],
    },
    ToolSpec {
        name: "location_list",
        endpoint: "/location.list",
        description: "List all locations in the organization.",
        properties: &[
            CURSOR,
            boolean("includeArchived", "Include archived locations", false),
        ],
        required: &[],
    },
    // Offers
    ToolSpec {
        name: "offer_create",
        endpoint: "/offer.create",
        description: "Create an offer for an application.",
        properties: &[
            string("applicationId", "The application ID"),
            string("startDate", "Offer start date (ISO 8601)"),
            string("offerDetails", "Offer details/notes"),
        ],
        required: &["applicationId"],
    },
    ToolSpec {
        name: "offer_list",
        endpoint: "/offer.list",
        description: "List offers with filtering.",
        properties: &[
            CURSOR,
            LIMIT,
            string("applicationId", "Filter by application ID"),
        ],
        required: &[],
    },
    // Lookups
    ToolSpec {
        name: "interview_stage_list",
        endpoint: "/interviewStage.list",
        description: "List all interview stages for a job's interview plan.",
        properties: &[string("jobId", "The job ID to get stages for")],
        required: &[],
    },
    ToolSpec {
        name: "source_list",
        endpoint: "/source.list",
        description: "List all candidate sources (for attribution).",
        properties: &[CURSOR],
        required: &[],
    },
    ToolSpec {
        name: "candidate_tag_list",
        endpoint: "/candidateTag.list",
        description: "List all available candidate tags.",
        properties: &[CURSOR],
        required: &[],
    },
    ToolSpec {
        name: "archive_reason_list",
        endpoint: "/archiveReason.list",
        description: "List all archive reasons (for rejecting applications).",
        properties: &[],
        required: &[],
    },
    // Feedback
    ToolSpec {
        name: "feedback_list",
        endpoint: "/applicationFeedback.list",
        description: "List all feedback submitted for an application. Use to review interviewer assessments.",
        properties: &[string("applicationId", "The application ID to get feedback for")],
        required: &["applicationId"],
    },
    ToolSpec {
        name: "feedback_form_list",
        endpoint: "/feedbackFormDefinition.list",
        description: "List available feedback form definitions. Shows what forms are used for collecting interviewer feedback.",
        properties: &[CURSOR],
        required: &[],
    },
];
