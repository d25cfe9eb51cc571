//! Notification email rendering.
//!
//! Subjects and bodies follow the product's original notification mails:
//! a greeting, the task and due date, and a view-task button linking back
//! to the client origin captured at task creation.

use minijinja::{Environment, context};

const ASSIGNMENT_TEMPLATE: &str = r#"<table width="100%" cellpadding="0" cellspacing="0" style="font-family: Arial, Helvetica, sans-serif; background-color:#f4f6f8; padding:30px;">
  <tr><td align="center">
    <table width="600" cellpadding="0" cellspacing="0" style="background:#ffffff; border-radius:8px;">
      <tr><td style="padding:20px 30px; border-bottom:1px solid #eaeaea;">
        <h2 style="margin:0; color:#333;">New Task Assigned</h2>
      </td></tr>
      <tr><td style="padding:30px; color:#555; font-size:15px; line-height:1.6;">
        <p>Hi <strong>{{ assignee_name }}</strong>,</p>
        <p>You have been assigned a new task in <strong>{{ project_name }}</strong>.
        Please review and complete it before the due date.</p>
        <table width="100%" cellpadding="0" cellspacing="0" style="margin:20px 0;">
          <tr><td style="padding:8px 0; width:120px;"><strong>Task:</strong></td>
              <td style="padding:8px 0;">{{ task_title }}</td></tr>
          {% if due_date %}
          <tr><td style="padding:8px 0;"><strong>Due Date:</strong></td>
              <td style="padding:8px 0;">{{ due_date }}</td></tr>
          {% endif %}
        </table>
        {% if origin %}
        <p style="text-align:center; margin:30px 0;">
          <a href="{{ origin }}" style="background:#2563eb; color:#ffffff; text-decoration:none; padding:12px 24px; border-radius:6px; font-weight:bold; display:inline-block;">View Task</a>
        </p>
        {% endif %}
        <p style="margin-top:30px;">Best regards,<br /><strong>Your Task Management Team</strong></p>
      </td></tr>
      <tr><td style="padding:15px 30px; background:#f9fafb; font-size:12px; color:#888; text-align:center; border-top:1px solid #eaeaea;">
        This is an automated message. Please do not reply.
      </td></tr>
    </table>
  </td></tr>
</table>
"#;

const REMINDER_TEMPLATE: &str = r#"<table width="100%" cellpadding="0" cellspacing="0" style="font-family: Arial, Helvetica, sans-serif; background-color:#f4f6f8; padding:30px;">
  <tr><td align="center">
    <table width="600" cellpadding="0" cellspacing="0" style="background:#ffffff; border-radius:8px;">
      <tr><td style="padding:20px 30px; border-bottom:1px solid #eaeaea;">
        <h2 style="margin:0; color:#333;">Task Due Today &ndash; Friendly Reminder</h2>
      </td></tr>
      <tr><td style="padding:30px; color:#555; font-size:15px; line-height:1.6;">
        <p>Hi <strong>{{ assignee_name }}</strong>,</p>
        <p>This is a friendly reminder that the following task in
        <strong>{{ project_name }}</strong> is <strong>due</strong>.
        Please ensure it is completed by the end of the day.</p>
        <table width="100%" cellpadding="0" cellspacing="0" style="margin:20px 0;">
          <tr><td style="padding:8px 0; width:120px;"><strong>Task:</strong></td>
              <td style="padding:8px 0;">{{ task_title }}</td></tr>
          {% if due_date %}
          <tr><td style="padding:8px 0;"><strong>Due Date:</strong></td>
              <td style="padding:8px 0; color:#d97706; font-weight:bold;">{{ due_date }}</td></tr>
          {% endif %}
        </table>
        {% if origin %}
        <p style="text-align:center; margin:30px 0;">
          <a href="{{ origin }}" style="background:#d97706; color:#ffffff; text-decoration:none; padding:12px 24px; border-radius:6px; font-weight:bold; display:inline-block;">View Task</a>
        </p>
        {% endif %}
        <p>If the task has already been completed, please disregard this message.</p>
        <p style="margin-top:30px;">Best regards,<br /><strong>Your Task Management Team</strong></p>
      </td></tr>
      <tr><td style="padding:15px 30px; background:#f9fafb; font-size:12px; color:#888; text-align:center; border-top:1px solid #eaeaea;">
        This is an automated reminder. Please do not reply.
      </td></tr>
    </table>
  </td></tr>
</table>
"#;

/// Context for rendering a task notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNotification<'a> {
    /// Assignee's display name.
    pub assignee_name: &'a str,
    /// Task title.
    pub task_title: &'a str,
    /// Owning project's name.
    pub project_name: &'a str,
    /// Formatted due date, when the task has one.
    pub due_date: Option<String>,
    /// Client origin URL for the view-task link, when captured.
    pub origin: Option<&'a str>,
}

/// Pre-compiled notification email templates.
#[derive(Debug, Clone)]
pub struct EmailTemplates {
    env: Environment<'static>,
}

impl EmailTemplates {
    /// Compiles the notification templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("assignment", ASSIGNMENT_TEMPLATE)?;
        env.add_template("reminder", REMINDER_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Returns the assignment email subject line.
    #[must_use]
    pub fn assignment_subject(project_name: &str) -> String {
        format!("New task assignment in {project_name}")
    }

    /// Returns the reminder email subject line.
    #[must_use]
    pub fn reminder_subject(task_title: &str, project_name: &str) -> String {
        format!("Reminder: \"{task_title}\" in {project_name} is due")
    }

    /// Renders the assignment email body.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_assignment(
        &self,
        notification: &TaskNotification<'_>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("assignment")?.render(context! {
            assignee_name => notification.assignee_name,
            task_title => notification.task_title,
            project_name => notification.project_name,
            due_date => notification.due_date,
            origin => notification.origin,
        })
    }

    /// Renders the reminder email body.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_reminder(
        &self,
        notification: &TaskNotification<'_>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("reminder")?.render(context! {
            assignee_name => notification.assignee_name,
            task_title => notification.task_title,
            project_name => notification.project_name,
            due_date => notification.due_date,
            origin => notification.origin,
        })
    }
}
